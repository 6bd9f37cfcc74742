use std::fs::File;
use std::io::BufWriter;
use std::path::{
    Path,
    PathBuf
};
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand
};
use tracing::debug;

use numint::configuration::Configuration;
use numint::input::integralinput::IntegralInput;
use numint::manager::manager::IManager;
use numint::math::function::fixedintegrand::FixedIntegrand;
use numint::math::function::integrand::Integrand;
use numint::math::quadrature::convergence::ConvergenceStudy;
use numint::math::quadrature::quadrature::QuadratureRule;
use numint::plot::jsonplotter::JsonPlotter;
use numint::plot::plot::{
    FunctionPlot,
    NullPlotter,
    PlotError,
    Plotter,
    DEFAULT_PLOT_SAMPLES
};
use numint::task::integraltask::{
    BoundsPolicy,
    IntegralTask
};

/// Definite integrals of the fixed integrands by rectangle, Simpson and trapezoidal rules
#[derive(Parser)]
#[command(name = "numint")]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the tasks of a JSON configuration file
    Run {
        #[arg(short = 'c', long)]
        config: PathBuf,

        /// Run only the named task
        #[arg(long)]
        task: Option<String>,

        /// Write plot samples of every task as JSON lines
        #[arg(long)]
        plot: Option<PathBuf>,
    },
    /// Integrate one fixed integrand from raw text input
    Eval {
        /// F1, F2 or F3
        #[arg(long)]
        integrand: String,

        #[arg(long, allow_hyphen_values = true)]
        lower: String,

        #[arg(long, allow_hyphen_values = true)]
        upper: String,

        #[arg(long, allow_hyphen_values = true)]
        intervals: String,

        /// left, right, middle, simpson or trapezoidal; defaults to the integrand's rules
        #[arg(long)]
        rule: Vec<String>,

        #[arg(long)]
        precision: Option<usize>,

        /// Refuse lower > upper instead of returning the signed integral
        #[arg(long)]
        reject_reversed: bool,

        #[arg(long)]
        plot: Option<PathBuf>,
    },
    /// Estimate the convergence order of a rule against the closed-form integral
    Converge {
        /// F1 or F3
        #[arg(long)]
        integrand: String,

        #[arg(long)]
        rule: String,

        #[arg(long, allow_hyphen_values = true)]
        lower: f64,

        #[arg(long, allow_hyphen_values = true)]
        upper: f64,

        #[arg(long, default_value = "8")]
        start: usize,

        #[arg(long, default_value = "6")]
        levels: usize,
    },
}

fn plotter_for(path: Option<&Path>) -> Result<Box<dyn Plotter>, PlotError> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(JsonPlotter::new(BufWriter::new(file))))
        },
        None => Ok(Box::new(NullPlotter))
    }
}

fn run(config_path: &Path, task: Option<String>, plot: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Configuration::from_reader(config_path)?;
    let names = match task {
        Some(name) => vec![name],
        None => config.integral_task_manager().names()
    };

    let mut plotter = plotter_for(plot.as_deref())?;
    for name in names {
        let report = config.evaluate(&name)?;
        println!("{}", report);

        let task = config.integral_task_manager().get(&name)?;
        let input = task.input();
        let plot = FunctionPlot::sample(
            &task.integrand(),
            input.lower_bound(),
            input.upper_bound(),
            config.plot_samples()
        )?;
        plotter.render(&plot)?;
    }
    plotter.flush()?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn eval(integrand: &str,
        lower: &str,
        upper: &str,
        intervals: &str,
        rule_names: &[String],
        precision: Option<usize>,
        reject_reversed: bool,
        plot: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let integrand: FixedIntegrand = integrand.parse()?;
    let input = IntegralInput::parse(lower, upper, intervals)?;
    let rules = rule_names
        .iter()
        .map(|name| QuadratureRule::parse(name))
        .collect::<Result<Vec<_>, _>>()?;
    let policy = if reject_reversed { BoundsPolicy::Reject } else { BoundsPolicy::Allow };
    let precision = precision.unwrap_or(integrand.report_precision());

    let task = IntegralTask::new(integrand.report_title().to_owned(), integrand, rules, input);
    let report = task.evaluate(policy, precision)?;
    println!("{}", report);

    let mut plotter = plotter_for(plot.as_deref())?;
    let plot = FunctionPlot::sample(&integrand, input.lower_bound(), input.upper_bound(), DEFAULT_PLOT_SAMPLES)?;
    plotter.render(&plot)?;
    plotter.flush()?;
    Ok(())
}

fn converge(integrand: &str,
            rule: &str,
            lower: f64,
            upper: f64,
            start: usize,
            levels: usize) -> Result<(), Box<dyn std::error::Error>> {
    let integrand: FixedIntegrand = integrand.parse()?;
    let rule = QuadratureRule::parse(rule)?;
    let reference = integrand
        .exact_integral(lower, upper)
        .ok_or_else(|| format!("{} has no closed-form integral", integrand.formula()))?;
    let study = ConvergenceStudy::run(rule, |x| integrand.value(x), lower, upper, reference, start, levels)?;

    println!("{} on {}, reference {:.12}", study.rule(), integrand.formula(), study.reference());
    for level in study.levels() {
        println!("n = {:>8}  h = {:.3e}  estimate = {:.12}  error = {:.3e}",
                 level.num_intervals(), level.step(), level.estimate(), level.error());
    }
    println!("estimated order {:.3} (nominal {})", study.estimated_order()?, study.rule().order());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("numint started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Run { config, task, plot } => run(&config, task, plot),
        Commands::Eval { integrand, lower, upper, intervals, rule, precision, reject_reversed, plot } => {
            eval(&integrand, &lower, &upper, &intervals, &rule, precision, reject_reversed, plot)
        },
        Commands::Converge { integrand, rule, lower, upper, start, levels } => {
            converge(&integrand, &rule, lower, upper, start, levels)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
