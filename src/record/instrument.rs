use serde::{Deserialize, Serialize};

/// Instrument metadata with nested device settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Label of the beam source (microscope model)
    pub source_label: String,

    /// Acquisition device configuration
    pub device_settings: DeviceSettings,
}

/// Device configuration as recorded by the source repository.
///
/// Values are kept as the free-form strings the repository exports
/// ("100 kV", "0.5 eV/pixel"); unit normalization is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSettings {
    /// Device (microscope) name
    pub device_name: String,

    /// Upper end of the recorded energy range
    pub max_energy: String,

    /// Lower end of the recorded energy range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_energy: Option<String>,

    /// Electron gun type
    pub gun_type: String,

    /// Primary beam energy
    pub beam_energy: String,

    /// Energy resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Energy step per channel
    pub step_size: String,

    /// Acquisition mode (e.g. "parallel")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_mode: Option<String>,

    /// Beam current
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beam_current: Option<String>,

    /// Detector type
    pub detector_type: String,

    /// Dark current correction note
    pub dark_current: String,
}
