use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::plot::plot::DEFAULT_PLOT_SAMPLES;
use crate::task::integralreport::{
    DEFAULT_PRECISION,
    IntegralReport
};
use crate::task::integraltask::{
    BoundsPolicy,
    IntegralTask
};
use crate::task::integraltaskmanager::IntegralTaskManager;


fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_plot_samples() -> usize {
    DEFAULT_PLOT_SAMPLES
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_precision")]
    precision: usize,
    #[serde(default)]
    bounds_policy: BoundsPolicy,
    #[serde(default = "default_plot_samples")]
    plot_samples: usize,
    #[serde(default)]
    tasks: Vec<serde_json::Value>
}

pub struct Configuration {
    precision: usize,
    bounds_policy: BoundsPolicy,
    plot_samples: usize,
    integral_task_manager_cell: RefCell<Manager<IntegralTask>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            precision: DEFAULT_PRECISION,
            bounds_policy: BoundsPolicy::default(),
            plot_samples: DEFAULT_PLOT_SAMPLES,
            integral_task_manager_cell: RefCell::new(IntegralTaskManager::new())
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.bounds_policy
    }

    pub fn plot_samples(&self) -> usize {
        self.plot_samples
    }

    pub fn integral_task_manager(&self) -> RefMut<'_, Manager<IntegralTask>> {
        self.integral_task_manager_cell.borrow_mut()
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let config = Configuration::from_json(json_value)?;
        info!(path = %file_path.display(), tasks = config.integral_task_manager().names().len(), "configuration loaded");
        Ok(config)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
        if json_prop.plot_samples < 2 {
            return Err(ManagerError::QuadratureError(QuadratureError::invalid_argument(
                format!("plot_samples must be at least 2, got {}", json_prop.plot_samples)
            )));
        }
        let config = Configuration {
            precision: json_prop.precision,
            bounds_policy: json_prop.bounds_policy,
            plot_samples: json_prop.plot_samples,
            ..Configuration::new()
        };
        config.integral_task_manager().insert_obj_from_json_vec(&json_prop.tasks)?;
        Ok(config)
    }

    pub fn evaluate(&self, name: &str) -> Result<IntegralReport, ManagerError> {
        let task = self.integral_task_manager().get(name)?;
        let report = task.evaluate(self.bounds_policy, self.precision)?;
        Ok(report)
    }

    /// Evaluates every task in name order, stopping at the first failure.
    pub fn evaluate_all(&self) -> Result<Vec<IntegralReport>, ManagerError> {
        let tasks = self.integral_task_manager().values();
        tasks.iter()
            .map(|task| task.evaluate(self.bounds_policy, self.precision).map_err(ManagerError::from))
            .collect()
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
