//! Server configuration.

use serde::{Deserialize, Serialize};

use yieldcalc_bonds::pricing::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use yieldcalc_bonds::YieldSolver;
use yieldcalc_core::validation::{
    ValidationRules, DEFAULT_ALLOWED_FREQUENCIES, DEFAULT_MAX_PERIODS,
};
use yieldcalc_math::solvers::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Coupon frequencies accepted by the calculate endpoint
    #[serde(default = "default_allowed_frequencies")]
    pub allowed_frequencies: Vec<u32>,

    /// Largest schedule a request may produce
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,

    /// Yield solver settings
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Yield solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Lowest per-period yield searched
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,

    /// Highest per-period yield searched
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,

    /// Convergence threshold on the price difference
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Bisection iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_allowed_frequencies() -> Vec<u32> {
    DEFAULT_ALLOWED_FREQUENCIES.to_vec()
}

fn default_max_periods() -> u32 {
    DEFAULT_MAX_PERIODS
}

fn default_lower_bound() -> f64 {
    DEFAULT_LOWER_BOUND
}

fn default_upper_bound() -> f64 {
    DEFAULT_UPPER_BOUND
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_frequencies: default_allowed_frequencies(),
            max_periods: default_max_periods(),
            solver: SolverSettings::default(),
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SolverSettings {
    /// Checks that the settings describe a usable bracket.
    ///
    /// The lower bound must stay above -1, where discount factors are
    /// undefined, and below the upper bound.
    pub fn validate(&self) -> Result<(), String> {
        if self.lower_bound.is_nan() || self.lower_bound <= -1.0 {
            return Err(format!(
                "solver.lower_bound must be greater than -1, got {}",
                self.lower_bound
            ));
        }
        if self.upper_bound.is_nan() || self.lower_bound >= self.upper_bound {
            return Err(format!(
                "solver.lower_bound ({}) must be less than solver.upper_bound ({})",
                self.lower_bound, self.upper_bound
            ));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(format!(
                "solver.tolerance must be positive, got {}",
                self.tolerance
            ));
        }
        if self.max_iterations == 0 {
            return Err("solver.max_iterations must be at least 1".to_string());
        }
        Ok(())
    }

    /// Builds a yield solver from these settings.
    pub fn to_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_bounds(self.lower_bound, self.upper_bound)
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// Solver settings are checked with [`SolverSettings::validate`].
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        let config: Self = toml::from_str(content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config
            .solver
            .validate()
            .map_err(|msg| std::io::Error::new(std::io::ErrorKind::InvalidData, msg))?;
        Ok(config)
    }

    /// Validation rules derived from this configuration.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules::default()
            .with_allowed_frequencies(self.allowed_frequencies.clone())
            .with_max_periods(self.max_periods)
    }
}
