//! Interrupt Descriptor Table (IDT) and the keyboard interrupt entry point.
//!
//! Only the keyboard vector is populated. Every other gate stays non-present,
//! so a stray interrupt on them faults.

use crate::arch::x86_64::keyboard::Ps2Keyboard;
use crate::arch::x86_64::pic::{InterruptIndex, PicBridge};
use crate::arch::x86_64::vga::CONSOLE;
use lazy_static::lazy_static;
use retro_hal::{InterruptController, ScancodeSource};
use x86_64::structures::idt::{HandlerFunc, InterruptDescriptorTable, InterruptStackFrame};

/// Builder for the interrupt descriptor table.
pub struct VectorTable {
    idt: InterruptDescriptorTable,
}

impl VectorTable {
    /// Creates a table with every gate missing.
    pub fn new() -> Self {
        VectorTable {
            idt: InterruptDescriptorTable::new(),
        }
    }

    /// Points one hardware interrupt vector at `entry`.
    ///
    /// The gate gets the current code segment, interrupt-gate type (IF cleared
    /// on entry) and ring 0 privilege.
    pub fn set_gate(&mut self, index: InterruptIndex, entry: HandlerFunc) -> &mut Self {
        self.idt[index.as_usize()].set_handler_fn(entry);
        self
    }

    fn into_inner(self) -> InterruptDescriptorTable {
        self.idt
    }
}

impl Default for VectorTable {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: InterruptDescriptorTable = {
        let mut table = VectorTable::new();
        table.set_gate(InterruptIndex::Keyboard, keyboard_interrupt_handler);
        table.into_inner()
    };
}

/// Publishes the IDT to the processor.
pub fn load() {
    IDT.load();
}

/// Remaps the PICs and loads the IDT. Interrupts stay disabled.
pub fn init() {
    PicBridge.initialize();
    load();
    log::info!(
        "IDT loaded, keyboard on vector {}",
        InterruptIndex::Keyboard.as_u8()
    );
}

/// Handler for the keyboard interrupt.
///
/// The interrupt gate keeps IF clear and the PIC keeps IRQ1 masked until the
/// EOI, so nothing else can take the console lock while this runs.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let mut keyboard = Ps2Keyboard::new();
    let mut pic = PicBridge;
    let vector = InterruptIndex::Keyboard.as_u8();

    match CONSOLE.get() {
        Some(console) => console
            .lock()
            .service_interrupt(&mut keyboard, &mut pic, vector),
        None => {
            // Drain the byte anyway, or the controller never raises IRQ1 again.
            keyboard.read_scancode();
            pic.end_of_interrupt(vector);
        }
    }
}
