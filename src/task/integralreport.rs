use std::fmt;

pub const DEFAULT_PRECISION: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    rule_name: String,
    value: f64
}

impl ReportLine {
    pub fn new(rule_name: String, value: f64) -> ReportLine {
        ReportLine { rule_name, value }
    }

    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Formatted outcome of one task: a heading and one line per rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralReport {
    title: String,
    formula: String,
    lines: Vec<ReportLine>,
    precision: usize
}

impl IntegralReport {
    pub fn new(title: String, formula: String, precision: usize) -> IntegralReport {
        IntegralReport { title, formula, lines: Vec::new(), precision }
    }

    pub fn push(&mut self, rule_name: &str, value: f64) {
        self.lines.push(ReportLine::new(rule_name.to_owned(), value));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn value_of(&self, rule_name: &str) -> Option<f64> {
        self.lines
            .iter()
            .find(|line| line.rule_name == rule_name)
            .map(|line| line.value)
    }
}

impl fmt::Display for IntegralReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.title, self.formula)?;
        for line in &self.lines {
            writeln!(f, "{}: {:.*}", line.rule_name, self.precision, line.value)?;
        }
        Ok(())
    }
}
