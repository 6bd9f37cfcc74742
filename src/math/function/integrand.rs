pub trait Integrand {
    fn value(&self, x: f64) -> f64;

    fn formula(&self) -> String;

    /// Closed-form `F` with `F' = value`, when one is known.
    fn antiderivative(&self, _x: f64) -> Option<f64> {
        None
    }

    fn exact_integral(&self, lower_bound: f64, upper_bound: f64) -> Option<f64> {
        let lhs = self.antiderivative(lower_bound)?;
        let rhs = self.antiderivative(upper_bound)?;
        Some(rhs - lhs)
    }
}
