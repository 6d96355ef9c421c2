use clap::{Args, ValueEnum};

/// Parameter sets for the standard sweeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 8-bit base width over [1, 32) at step 1e-6, widths 16 to 256.
    #[default]
    #[value(name = "8")]
    Bits8,

    /// 16-bit base width over [1, 8192) at step 1e-4, widths 32 to 512, then 768.
    #[value(name = "16")]
    Bits16,

    /// 32-bit base width over [1, 2^28) at step 1, widths 64 to 992.
    #[value(name = "32")]
    Bits32,

    /// 16-bit base width over [1, 128) at step 1e-4, widths 1024 to 16384,
    /// followed by their naive estimates.
    #[value(name = "16-wide")]
    Bits16Wide,

    /// 32-bit base width over [1, 2^23) at step 1, widths 1024 to 16384,
    /// followed by their naive estimates.
    #[value(name = "32-wide")]
    Bits32Wide,
}

/// Widths of the wide presets, all beyond the range of `f64`.
const WIDE_WIDTHS: [u32; 5] = [1024, 2048, 4096, 8192, 16_384];

/// Resolved inputs of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepInputs {
    pub bits: u32,
    pub left: f64,
    pub right: f64,
    pub step: f64,
    pub finish: u32,
    pub additional: Vec<u32>,

    /// Print the naive estimate for each additional width after the sweep.
    pub naive: bool,
}

impl Preset {
    /// Returns true for presets whose widths need extended precision.
    #[must_use]
    pub fn is_wide(self) -> bool {
        matches!(self, Self::Bits16Wide | Self::Bits32Wide)
    }

    #[must_use]
    pub fn inputs(self) -> SweepInputs {
        match self {
            Self::Bits8 => SweepInputs {
                bits: 8,
                left: 1.0,
                right: 32.0,
                step: 1e-6,
                finish: 256,
                additional: Vec::new(),
                naive: false,
            },
            Self::Bits16 => SweepInputs {
                bits: 16,
                left: 1.0,
                right: 8192.0,
                step: 1e-4,
                finish: 512,
                additional: vec![768],
                naive: false,
            },
            Self::Bits32 => SweepInputs {
                bits: 32,
                left: 1.0,
                right: f64::from(1_u32 << 28),
                step: 1.0,
                finish: 992,
                additional: Vec::new(),
                naive: false,
            },
            Self::Bits16Wide => SweepInputs {
                bits: 16,
                left: 1.0,
                right: 128.0,
                step: 1e-4,
                finish: 16,
                additional: WIDE_WIDTHS.to_vec(),
                naive: true,
            },
            Self::Bits32Wide => SweepInputs {
                bits: 32,
                left: 1.0,
                right: f64::from(1_u32 << 23),
                step: 1.0,
                finish: 32,
                additional: WIDE_WIDTHS.to_vec(),
                naive: true,
            },
        }
    }
}

/// Arguments of the `sweep` command.
#[derive(Debug, Default, Args)]
pub struct SweepArgs {
    /// Parameter preset. Explicit flags below override its values.
    #[arg(long, value_enum, default_value_t = Preset::Bits8)]
    pub preset: Preset,

    /// Base width; fixes s = 2^bits and the width progression stride.
    #[arg(long)]
    pub bits: Option<u32>,

    /// Left bound of every search interval (must be positive).
    #[arg(long)]
    pub left: Option<f64>,

    /// Right bound of the first search interval.
    #[arg(long)]
    pub right: Option<f64>,

    /// Sampling step; also sets the rounding precision.
    #[arg(long)]
    pub step: Option<f64>,

    /// Largest generated width (inclusive).
    #[arg(long)]
    pub finish: Option<u32>,

    /// Extra widths solved after the progression, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub additional: Option<Vec<u32>>,

    /// Print the naive estimate for each additional width after the sweep.
    #[arg(long)]
    pub naive: bool,
}

impl SweepArgs {
    /// Applies explicit flags on top of the preset.
    #[must_use]
    pub fn resolve(&self) -> SweepInputs {
        let preset = self.preset.inputs();
        SweepInputs {
            bits: self.bits.unwrap_or(preset.bits),
            left: self.left.unwrap_or(preset.left),
            right: self.right.unwrap_or(preset.right),
            step: self.step.unwrap_or(preset.step),
            finish: self.finish.unwrap_or(preset.finish),
            additional: self.additional.clone().unwrap_or(preset.additional),
            naive: self.naive || preset.naive,
        }
    }
}
