// Global configuration for table construction
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Conversion factor from the record's native MeV to eV.
pub const MEV_TO_EV: f64 = 1.0e6;

// Global configuration read when tables are built
pub static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::new()));

/// Configuration applied when decoding tables and models from a record.
///
/// The values are copied into a model at construction time, so changing the
/// global configuration never affects tables that already exist. Code that
/// needs to avoid global state can pass a `Config` explicitly to the
/// `*_with_config` constructors instead of going through [`Config::global`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Factor applied to every energy read from a record (grid points,
    /// temperatures, Bragg edges). Defaults to MeV -> eV.
    pub energy_scale: f64,
    /// Clamp the Bragg scattering cosine into [-1, 1].
    pub clamp_bragg_cosine: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Config {
            energy_scale: MEV_TO_EV,
            clamp_bragg_cosine: false,
        }
    }

    /// Set the factor applied to energies read from a record.
    ///
    /// Use `1.0` for records that already store energies in eV.
    pub fn set_energy_scale(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            panic!(
                "Invalid energy scale: '{}'. The scale must be a positive, finite number",
                scale
            );
        }
        self.energy_scale = scale;
    }

    /// Enable or disable clamping of the coherent elastic scattering cosine.
    pub fn set_clamp_bragg_cosine(&mut self, clamp: bool) {
        self.clamp_bragg_cosine = clamp;
    }

    /// Restore the default values
    pub fn clear(&mut self) {
        *self = Config::new();
    }
}

impl Config {
    /// Get the global configuration instance
    pub fn global() -> std::sync::MutexGuard<'static, Self> {
        CONFIG
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current global configuration.
    pub fn snapshot() -> Self {
        Config::global().clone()
    }
}
