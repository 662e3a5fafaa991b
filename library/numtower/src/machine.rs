/// The width of the machine integer that [`Number::to_machine_int`](crate::Number::to_machine_int)
/// converts to.
///
/// The width is passed explicitly rather than read from the host, so that conversions behave
/// identically across targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MachineWord {
    Bits32,
    Bits64,
}
impl MachineWord {
    /// The word size of the target this crate was compiled for
    #[cfg(target_pointer_width = "64")]
    pub const NATIVE: Self = Self::Bits64;
    #[cfg(not(target_pointer_width = "64"))]
    pub const NATIVE: Self = Self::Bits32;

    /// The smallest signed integer representable in this word
    pub const fn min(self) -> i64 {
        match self {
            Self::Bits32 => i32::MIN as i64,
            Self::Bits64 => i64::MIN,
        }
    }

    /// The largest signed integer representable in this word
    pub const fn max(self) -> i64 {
        match self {
            Self::Bits32 => i32::MAX as i64,
            Self::Bits64 => i64::MAX,
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Converts `i` to this word, returning whether the conversion was exact.
    ///
    /// Values that do not fit are clamped to [`min`](Self::min) or [`max`](Self::max) by sign.
    pub fn clamp(self, i: i64) -> (i64, bool) {
        if i < self.min() {
            (self.min(), false)
        } else if i > self.max() {
            (self.max(), false)
        } else {
            (i, true)
        }
    }

    /// The saturated value for an integer that is too large for any word, by sign
    pub(crate) fn saturate(self, negative: bool) -> i64 {
        if negative {
            self.min()
        } else {
            self.max()
        }
    }
}
impl Default for MachineWord {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// The smallest signed machine integer on the native word
pub const MACHINE_INT_MIN: i64 = MachineWord::NATIVE.min();
/// The largest signed machine integer on the native word
pub const MACHINE_INT_MAX: i64 = MachineWord::NATIVE.max();
