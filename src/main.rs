use mlog::{
    log_debug, log_error, log_fatal, log_info, log_warning,
    loggers::console::{ColorMode, ConsoleLogger},
};

static DEVICES: [&str; 2] = ["Integrated GPU", "Discrete GPU"];

fn main() {
    log_debug!("Hello Vulkan");
    for (index, name) in DEVICES.iter().enumerate() {
        log_info!("Your Device[{}]: {}", index, name);
    }
    log_warning!("No queue family on device 1 supports presentation, using device 0");
    log_error!("glCreateShader failed for type {}", 0x8B31);
    log_fatal!("vkCreateInstance Error");

    // Same record, colored only when stdout is a terminal.
    let mut piped = ConsoleLogger::stdout().with_color_mode(ColorMode::Auto);
    let colored = piped.colored();
    log_info!(logger: &mut piped, "stdout colored: {}", colored);
}
