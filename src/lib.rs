//! Tabulated nuclear data for Monte Carlo transport.
//!
//! Tables are decoded from a flat, positionally addressed record (see
//! [`Record`]) into [`Tabulated1D`] functions, which in turn feed the
//! [`GeneralEvaporation`] secondary energy law and the [`CoherentElastic`]
//! Bragg scattering model. Everything is immutable once built and can be
//! shared freely between threads; samplers take the caller's uniform random
//! number source as a closure.

pub mod angle_energy;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod record;
pub mod secondary_evaporation;
pub mod tabulated;
pub mod thermal_coherent_elastic;
pub mod utilities;

pub use angle_energy::{AngleEnergy, AngleEnergyPacket, EnergyLaw};
pub use config::{Config, MEV_TO_EV};
pub use error::{DataFormatError, Result};
pub use interpolation::Interpolation;
pub use record::{Record, XssArray, XssValue};
pub use secondary_evaporation::GeneralEvaporation;
pub use tabulated::{MultiRegion1D, Region1D, Tab1Record, Tabulated1D};
pub use thermal_coherent_elastic::CoherentElastic;
pub use utilities::{find_interval, floor_index};
