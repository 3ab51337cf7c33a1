///! Device pins

use embedded_hal::digital::v2::OutputPin;


use crate::constants::*;
use crate::errors::*;
use crate::register::*;

/// DDS-60 device
pub struct Dds60<LOAD, CLK, DATA> {
    pin_load: LOAD,
    pin_clock: CLK,
    pin_data: DATA,
}


impl<LOAD, CLK, DATA,> Dds60<LOAD, CLK, DATA,>
where LOAD: OutputPin,
      CLK: OutputPin,
      DATA: OutputPin,
{
    /// Creates the device.
    ///
    /// `pin_load` - "frequency update" strobe (`FQ_UD`)
    /// `pin_clock` - serial clock (`W_CLK`)
    /// `pin_data` - serial data (`DATA`)
    ///
    /// The three pins must be configured as push-pull outputs and
    /// wired to three distinct board lines. The chip keeps whatever
    /// state it powered up in until the first `tune`/`off` call.
    pub fn new(
        pin_load: LOAD,
        pin_clock: CLK,
        pin_data: DATA,
    ) -> Self {
        Dds60 { pin_load, pin_clock, pin_data, }
    }

    /// Sets the output frequency, Hz. `hz == 0` powers the core down.
    ///
    /// Shifts a full program word into the chip (LSB first, one bit
    /// per rising `W_CLK` edge) and strobes `FQ_UD` to transfer the
    /// shift register into the operating registers in one step.
    /// Power-down sends only the control byte; the 32 tuning word
    /// bits are skipped, matching the chip's abbreviated load.
    ///
    /// Blocking call, no readback: the chip offers no way to confirm
    /// it latched the frame.
    pub fn tune(self: &mut Self, hz: u32) -> Result<(), Error> {
        let w = ProgramWord::new_hz(hz);

        if let ControlByte::ClockMultiplier = w.control {
            // Known idle levels going in; the chip samples DATA on
            // the low to high clock transition.
            self.load_disable()?;
            self.pin_clock.set_low().map_err(|_| Error::Pin)?;
            self.shift_out(w.tune.0, TUNE_WORD_BITS)?;
        }
        self.shift_out(w.control as u32, CONTROL_BITS)?;

        // Shift register transfers to the operating registers on the
        // FQ_UD rising edge; back low leaves the bus idle.
        self.load_enable()?;
        self.load_disable()
    }

    /// Powers the DDS core down. Same as `tune(0)`.
    pub fn off(self: &mut Self) -> Result<(), Error> {
        self.tune(0)
    }

    /// Clocks the low `nbits` of `w` out on DATA, LSB first, one
    /// rising W_CLK edge per bit.
    fn shift_out(self: &mut Self, mut w: u32, nbits: u32) -> Result<(), Error> {
        for _ in 0..nbits {
            if w & 1 == 1 {
                self.pin_data.set_high().map_err(|_| Error::Pin)?;
            } else {
                self.pin_data.set_low().map_err(|_| Error::Pin)?;
            }
            self.pin_clock.set_high().map_err(|_| Error::Pin)?;
            self.pin_clock.set_low().map_err(|_| Error::Pin)?;
            w >>= 1;
        }
        Ok(())
    }

    /// When FQ_UD goes high, the frame in the input shift register is
    /// loaded into the operating registers.
    #[inline(always)]
    fn load_enable(self: &mut Self) -> Result<(), Error> {
        self.pin_load.set_high().map_err(|_| Error::Pin)
    }

    /// Return the update strobe to idle
    #[inline(always)]
    fn load_disable(self: &mut Self) -> Result<(), Error> {
        self.pin_load.set_low().map_err(|_| Error::Pin)
    }
}
