//! Boot sequence: banner, interrupt setup and the first prompt.

pub mod banner;

use retro_console::ConsoleConfig;
use x86_64::instructions::interrupts;

use crate::arch::x86_64::{interrupts as idt, vga};

/// Console configuration for this machine: the default look, scrolling below
/// the banner.
pub const CONSOLE_CONFIG: ConsoleConfig = ConsoleConfig::DEFAULT.with_scroll_start(banner::HEIGHT);

/// Brings the console up and arms the keyboard.
///
/// Must run with interrupts disabled, as the bootloader leaves them. On
/// return the keyboard interrupt is live and the prompt is on screen.
pub fn start() {
    {
        let mut console = vga::console().lock();
        console.startup(&banner::LOGO);
        let region = console.console().scroll_region();
        log::info!("console ready, scrolling rows {}..{}", region.start, region.end);
    }

    idt::init();
    interrupts::enable();

    interrupts::without_interrupts(|| vga::console().lock().print_prompt());
    log::info!("keyboard interrupts enabled");
}
