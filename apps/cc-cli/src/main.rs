mod config;
mod error;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cc_chem::{
    AntoineParameters, CylinderTank, MixtureComponent, generate_c_to_f_table,
    mixture_psat_sweep_celsius, psat_antoine, psat_sweep,
};
use cc_core::ensure_finite;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};
use crate::output::{Format, Metric, Report};

#[derive(Parser)]
#[command(name = "cc-cli")]
#[command(about = "ChemCalc CLI - introductory chemical-engineering calculations", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,
    /// Write the rendered output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Volume of a vertical cylinder tank and liquid height at a fill fraction
    Tank {
        /// Inner diameter in centimeters
        #[arg(long, default_value_t = 140.0)]
        diameter_cm: f64,
        /// Height in meters
        #[arg(long, default_value_t = 2.0)]
        height_m: f64,
        /// Fill fraction by volume (0..1)
        #[arg(long, default_value_t = 0.8)]
        fraction: f64,
    },
    /// Celsius to Fahrenheit table
    CToF {
        /// First Celsius value
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
        /// Last Celsius value (inclusive)
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        stop: f64,
        /// Increment in Celsius degrees
        #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
        step: f64,
    },
    /// Saturation pressure of a pure substance (Antoine, T in K, P in kPa)
    Psat {
        /// Absolute temperature in K
        #[arg(long, default_value_t = 298.15, allow_negative_numbers = true)]
        t_k: f64,
        #[command(flatten)]
        antoine: AntoineArgs,
    },
    /// Saturation pressure curve over a Kelvin range
    PsatSweep {
        /// Lowest temperature in K
        #[arg(long, default_value_t = 293.15, allow_negative_numbers = true)]
        t_min: f64,
        /// Highest temperature in K (inclusive)
        #[arg(long, default_value_t = 373.15, allow_negative_numbers = true)]
        t_max: f64,
        /// Temperature step in K
        #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
        dt: f64,
        #[command(flatten)]
        antoine: AntoineArgs,
    },
    /// Ideal-mixture vapor pressure (Raoult) over a Celsius range
    Mixture {
        /// Lowest temperature in C
        #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
        t_min_c: f64,
        /// Highest temperature in C (inclusive)
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        t_max_c: f64,
        /// Temperature step in C
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        dt_c: f64,
        /// YAML file listing the components
        #[arg(long, conflicts_with = "components")]
        config: Option<PathBuf>,
        /// Component as `x,A,B,C`; repeat for each component
        #[arg(long = "component", value_parser = config::parse_component)]
        components: Vec<MixtureComponent>,
    },
}

/// Antoine coefficients for `ln(P/kPa) = A - B/(T/K + C)`.
#[derive(Args, Debug, Clone, Copy)]
struct AntoineArgs {
    #[arg(long, default_value_t = AntoineParameters::HEXANE_LIKE.a, allow_negative_numbers = true)]
    a: f64,
    #[arg(long, default_value_t = AntoineParameters::HEXANE_LIKE.b, allow_negative_numbers = true)]
    b: f64,
    #[arg(long, default_value_t = AntoineParameters::HEXANE_LIKE.c, allow_negative_numbers = true)]
    c: f64,
}

impl AntoineArgs {
    fn params(self) -> CliResult<AntoineParameters> {
        Ok(AntoineParameters::new(
            ensure_finite(self.a, "A")?,
            ensure_finite(self.b, "B")?,
            ensure_finite(self.c, "C")?,
        ))
    }
}

/// Second component used when none are given.
const DEFAULT_SECOND_COMPONENT: AntoineParameters = AntoineParameters::new(14.0, 2800.0, -40.0);

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let report = match cli.command {
        Commands::Tank {
            diameter_cm,
            height_m,
            fraction,
        } => cmd_tank(diameter_cm, height_m, fraction)?,
        Commands::CToF { start, stop, step } => cmd_c_to_f(start, stop, step)?,
        Commands::Psat { t_k, antoine } => cmd_psat(t_k, antoine.params()?)?,
        Commands::PsatSweep {
            t_min,
            t_max,
            dt,
            antoine,
        } => cmd_psat_sweep(t_min, t_max, dt, antoine.params()?)?,
        Commands::Mixture {
            t_min_c,
            t_max_c,
            dt_c,
            config,
            components,
        } => {
            let components = resolve_components(config.as_deref(), components)?;
            cmd_mixture(t_min_c, t_max_c, dt_c, &components)?
        }
    };

    info!(rows = report.row_count(), "calculation finished");
    let rendered = report.render(cli.format)?;
    emit(&rendered, cli.output.as_deref())
}

fn cmd_tank(diameter_cm: f64, height_m: f64, fraction: f64) -> CliResult<Report> {
    debug!(diameter_cm, height_m, fraction, "tank");
    let tank = CylinderTank::new(
        ensure_finite(diameter_cm, "diameter")?,
        ensure_finite(height_m, "height")?,
    )?;
    let level = tank.fill_height_m(fraction)?;

    Ok(Report::Metrics {
        title: "Cylinder tank".to_string(),
        metrics: vec![
            Metric::new("Full volume (L)", tank.volume_liters(), 2),
            Metric::new(
                format!("Liquid volume at {:.0}% (L)", fraction * 100.0),
                tank.fill_volume_liters(fraction)?,
                2,
            ),
            Metric::new(
                format!("Liquid height at {:.0}% (m)", fraction * 100.0),
                level,
                3,
            ),
        ],
    })
}

fn cmd_c_to_f(start: f64, stop: f64, step: f64) -> CliResult<Report> {
    debug!(start, stop, step, "celsius to fahrenheit table");
    Ok(Report::Table {
        title: "Celsius to Fahrenheit".to_string(),
        columns: ["Celsius (°C)", "Fahrenheit (°F)"],
        rows: generate_c_to_f_table(start, stop, step)?,
    })
}

fn cmd_psat(t_k: f64, params: AntoineParameters) -> CliResult<Report> {
    debug!(t_k, ?params, "saturation pressure");
    let p = psat_antoine(ensure_finite(t_k, "temperature")?, &params)?;
    Ok(Report::Metrics {
        title: "Antoine saturation pressure".to_string(),
        metrics: vec![
            Metric::new("T (K)", t_k, 2),
            Metric::new("P_sat (kPa)", p, 4),
        ],
    })
}

fn cmd_psat_sweep(t_min: f64, t_max: f64, dt: f64, params: AntoineParameters) -> CliResult<Report> {
    debug!(t_min, t_max, dt, ?params, "saturation pressure sweep");
    Ok(Report::Table {
        title: "Antoine saturation pressure vs temperature".to_string(),
        columns: ["T (K)", "P_sat (kPa)"],
        rows: psat_sweep(t_min, t_max, dt, &params)?,
    })
}

fn cmd_mixture(
    t_min_c: f64,
    t_max_c: f64,
    dt_c: f64,
    components: &[MixtureComponent],
) -> CliResult<Report> {
    debug!(t_min_c, t_max_c, dt_c, n = components.len(), "raoult mixture sweep");
    for comp in components {
        ensure_finite(comp.mole_fraction, "mole fraction")?;
    }
    Ok(Report::Table {
        title: "Ideal mixture vapor pressure (Raoult)".to_string(),
        columns: ["T (°C)", "P_mix (kPa)"],
        rows: mixture_psat_sweep_celsius(t_min_c, t_max_c, dt_c, components)?,
    })
}

fn resolve_components(
    config: Option<&Path>,
    components: Vec<MixtureComponent>,
) -> CliResult<Vec<MixtureComponent>> {
    if let Some(path) = config {
        let loaded = config::load_yaml(path)?.components();
        info!(path = %path.display(), count = loaded.len(), "loaded mixture config");
        if loaded.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "no components listed in {}",
                path.display()
            )));
        }
        return Ok(loaded);
    }

    if components.is_empty() {
        Ok(vec![
            MixtureComponent::new(0.5, AntoineParameters::HEXANE_LIKE),
            MixtureComponent::new(0.5, DEFAULT_SECOND_COMPONENT),
        ])
    } else {
        Ok(components)
    }
}

fn emit(rendered: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = rendered.len(), "wrote output");
            Ok(())
        }
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_the_worked_tank() {
        let report = cmd_tank(140.0, 2.0, 0.8).unwrap();
        let Report::Metrics { metrics, .. } = report else {
            panic!("expected metrics");
        };
        assert!((metrics[0].value - 3078.76).abs() < 0.01);
        assert!((metrics[2].value - 1.6).abs() < 1e-9);
        assert!(metrics[2].label.contains("80%"));
    }

    #[test]
    fn c_to_f_command_parses_negative_start() {
        let cli = Cli::try_parse_from(["cc-cli", "c-to-f", "--start", "-10", "--stop", "0"]).unwrap();
        let Commands::CToF { start, stop, step } = cli.command else {
            panic!("expected c-to-f");
        };
        assert_eq!((start, stop, step), (-10.0, 0.0, 5.0));
    }

    #[test]
    fn psat_defaults_use_hexane() {
        let cli = Cli::try_parse_from(["cc-cli", "psat"]).unwrap();
        let Commands::Psat { t_k, antoine } = cli.command else {
            panic!("expected psat");
        };
        assert_eq!(t_k, 298.15);
        assert_eq!(antoine.params().unwrap(), AntoineParameters::HEXANE_LIKE);
    }

    #[test]
    fn non_finite_coefficient_is_rejected() {
        let args = AntoineArgs {
            a: f64::NAN,
            b: 1.0,
            c: 0.0,
        };
        assert!(matches!(
            args.params(),
            Err(CliError::Calc(cc_core::CcError::NonFinite { .. }))
        ));
    }

    #[test]
    fn mixture_components_from_flags() {
        let cli = Cli::try_parse_from([
            "cc-cli",
            "mixture",
            "--component",
            "0.3,14.0568,2825.42,-42.7089",
            "--component",
            "0.7,14.0,2800,-40",
        ])
        .unwrap();
        let Commands::Mixture { components, .. } = cli.command else {
            panic!("expected mixture");
        };
        assert_eq!(components.len(), 2);
        assert_eq!(components[1].params, DEFAULT_SECOND_COMPONENT);
    }

    #[test]
    fn mixture_defaults_to_two_components() {
        let comps = resolve_components(None, vec![]).unwrap();
        assert_eq!(comps.len(), 2);
        let report = cmd_mixture(20.0, 100.0, 10.0, &comps).unwrap();
        assert_eq!(report.row_count(), 9);
    }

    #[test]
    fn csv_output_is_written_to_file() {
        let path = std::env::temp_dir().join("cc_cli_c_to_f_export.csv");
        let rendered = cmd_c_to_f(0.0, 10.0, 5.0)
            .unwrap()
            .render(Format::Csv)
            .unwrap();
        emit(&rendered, Some(path.as_path())).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Celsius (°C),Fahrenheit (°F)\n0,32\n5,41\n10,50\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_output_reports_path() {
        let path = std::env::temp_dir()
            .join("cc_cli_missing_dir")
            .join("out.csv");
        let err = emit("a,b\n", Some(path.as_path())).unwrap_err();
        assert!(matches!(err, CliError::OutputWrite { .. }));
        assert!(err.to_string().contains("out.csv"));
    }

    #[test]
    fn mixture_config_file_supplies_components() {
        let path = std::env::temp_dir().join("cc_cli_mixture_two.yaml");
        std::fs::write(
            &path,
            "components:\n  - { x: 0.3, a: 14.0568, b: 2825.42, c: -42.7089 }\n  - { x: 0.7, a: 14.0, b: 2800.0, c: -40.0 }\n",
        )
        .unwrap();

        let comps = resolve_components(Some(path.as_path()), vec![]).unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].mole_fraction, 0.3);
        assert_eq!(comps[1].params, DEFAULT_SECOND_COMPONENT);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn mixture_config_without_components_is_rejected() {
        let path = std::env::temp_dir().join("cc_cli_mixture_empty.yaml");
        std::fs::write(&path, "components: []\n").unwrap();

        let err = resolve_components(Some(path.as_path()), vec![]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(err.to_string().contains("no components"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn mixture_config_conflicts_with_component_flags() {
        let result = Cli::try_parse_from([
            "cc-cli",
            "mixture",
            "--config",
            "mix.yaml",
            "--component",
            "1,14,2800,-40",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn calculation_errors_surface_as_calc_errors() {
        assert!(matches!(cmd_tank(0.0, 2.0, 0.8), Err(CliError::Calc(_))));
        assert!(matches!(cmd_c_to_f(0.0, 10.0, 0.0), Err(CliError::Calc(_))));
        assert!(matches!(
            cmd_mixture(20.0, 30.0, 5.0, &[]),
            Err(CliError::Calc(_))
        ));
    }
}
