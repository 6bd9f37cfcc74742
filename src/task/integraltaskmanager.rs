use serde::Deserialize;

use crate::input::integralinput::IntegralInput;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::function::fixedintegrand::FixedIntegrand;
use crate::math::quadrature::quadrature::QuadratureRule;
use crate::math::quadrature::quadratureerror::validate_interval;
use crate::task::integraltask::IntegralTask;

#[derive(Deserialize)]
struct IntegralTaskJsonProp {
    name: String,
    integrand: FixedIntegrand,
    #[serde(default)]
    rules: Vec<QuadratureRule>,
    lower_bound: f64,
    upper_bound: f64,
    num_intervals: usize
}


fn get_integral_task_from_json(json_value: serde_json::Value) -> Result<IntegralTask, ManagerError> {
    let task_prop: IntegralTaskJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    validate_interval(task_prop.lower_bound, task_prop.upper_bound, task_prop.num_intervals)?;
    let input = IntegralInput::new(task_prop.lower_bound, task_prop.upper_bound, task_prop.num_intervals);
    Ok(IntegralTask::new(task_prop.name, task_prop.integrand, task_prop.rules, input))
}


pub struct IntegralTaskManager;


impl IntegralTaskManager {
    pub fn new() -> Manager<IntegralTask> {
        Manager::new(get_integral_task_from_json)
    }
}
