//! QEMU harness for the `tests/` binaries: results go to COM1 and the run ends
//! through the isa-debug-exit device configured in `[package.metadata.bootimage]`.

use crate::serial_println;

/// Values written to the debug exit port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// isa-debug-exit device port.
const DEBUG_EXIT_PORT: u16 = 0xf4;

/// Ends the QEMU run. The process exits with `(code << 1) | 1`, so `Success`
/// becomes the `test-success-exit-code` of 33.
pub fn exit_qemu(exit_code: QemuExitCode) {
    #[cfg(target_arch = "x86_64")]
    {
        use x86_64::instructions::port::Port;

        // SAFETY: the debug exit device only terminates QEMU; on real hardware
        // the port is unused.
        unsafe {
            let mut port = Port::new(DEBUG_EXIT_PORT);
            port.write(exit_code as u32);
        }
    }
}

/// A `#[test_case]` item.
pub trait Testable {
    /// Runs the case, logging its name and `[ok]` over serial.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        serial_println!("test {} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// `#![test_runner]` for the boot tests. A failing case never returns; it ends
/// in [`test_panic_handler`].
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("running {} boot tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Reports the failed case over serial and exits QEMU with `Failed`.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}
