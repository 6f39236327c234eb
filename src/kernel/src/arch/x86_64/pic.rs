//! Support for the primary and secondary 8259 Programmable Interrupt Controllers (PICs).
//!
//! The BIOS leaves the PICs on vectors 8..15, on top of the CPU exception
//! vectors. We move them to 32..47 and unmask the keyboard line only.

use pic8259::ChainedPics;
use retro_hal::InterruptController;
use spin::Mutex;
use x86_64::instructions::port::Port;

/// The offset of the first PIC (master).
///
/// IRQs 0..7 are mapped to interrupts 32..39.
pub const PIC_1_OFFSET: u8 = 32;

/// The offset of the second PIC (slave).
///
/// IRQs 8..15 are mapped to interrupts 40..47.
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Master interrupt mask: everything masked except IRQ1 (keyboard).
pub const MASTER_MASK: u8 = 0xFD;

/// Slave interrupt mask: everything masked.
pub const SLAVE_MASK: u8 = 0xFF;

const MASTER_DATA_PORT: u16 = 0x21;
const SLAVE_DATA_PORT: u16 = 0xA1;

/// The global instance of the chained PICs.
pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

/// Possible IRQ indices.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    /// Keyboard interrupt (IRQ1).
    Keyboard = PIC_1_OFFSET + 1,
}

impl InterruptIndex {
    /// Returns the internal u8 value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the internal usize value.
    pub fn as_usize(self) -> usize {
        usize::from(self as u8)
    }
}

/// The chained PICs seen through the HAL.
#[derive(Debug, Default, Clone, Copy)]
pub struct PicBridge;

impl InterruptController for PicBridge {
    /// Runs the ICW1..ICW4 remap sequence on both chips, then writes the
    /// keyboard-only masks.
    fn initialize(&mut self) {
        let mut pics = PICS.lock();
        let mut master: Port<u8> = Port::new(MASTER_DATA_PORT);
        let mut slave: Port<u8> = Port::new(SLAVE_DATA_PORT);

        // SAFETY: ports 0x20/0x21/0xA0/0xA1 belong to the legacy PICs, which
        // are present on every PC-compatible machine and QEMU. Interrupts are
        // still disabled while the controllers are reprogrammed.
        unsafe {
            pics.initialize();
            master.write(MASTER_MASK);
            slave.write(SLAVE_MASK);
        }
        log::debug!(
            "PICs remapped to {}/{}, masks {:#04x}/{:#04x}",
            PIC_1_OFFSET,
            PIC_2_OFFSET,
            MASTER_MASK,
            SLAVE_MASK
        );
    }

    fn end_of_interrupt(&mut self, vector: u8) {
        // SAFETY: `vector` is the vector currently being serviced, so the
        // controllers expect exactly this acknowledgment.
        unsafe {
            PICS.lock().notify_end_of_interrupt(vector);
        }
    }
}

/// Reads back the master and slave interrupt masks.
pub fn masks() -> [u8; 2] {
    let mut master: Port<u8> = Port::new(MASTER_DATA_PORT);
    let mut slave: Port<u8> = Port::new(SLAVE_DATA_PORT);

    // SAFETY: reading the PIC data ports outside an initialization sequence
    // returns the mask register and has no side effects.
    unsafe { [master.read(), slave.read()] }
}
