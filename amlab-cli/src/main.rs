//! amlab CLI: generate, classify and explain amplitude-modulated signals.
//!
//! Commands:
//! - `generate`: sample the message, carrier, AM signal and envelopes
//! - `classify`: modulation index and regime for a pair of amplitudes
//! - `analyze`: sidebands, bandwidth, power budget and envelope extremes
//! - `explain`: print the educational topics
//! - `config show|init`: inspect or create the config file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use amlab_core::config::default_config_path;
use amlab_core::content;
use amlab_core::export::{self, WaveformReport};
use amlab_core::logging::{self, LogConfig, LogLevel};
use amlab_core::{AmAnalysis, AmParams, LabConfig, ModulationIndex, Trace, Waveforms};

#[derive(Parser)]
#[command(
    name = "amlab",
    about = "amlab CLI: amplitude modulation signals, analysis and notes",
    version
)]
struct Cli {
    /// Path to a TOML config file (default: the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Parameters shared by `generate` and `analyze`; unset values come from the config.
#[derive(clap::Args)]
struct ParamArgs {
    /// Message frequency in Hz (1.0 to 10.0).
    #[arg(long)]
    fm: Option<f64>,

    /// Message amplitude (0.0 to 5.0).
    #[arg(long)]
    am: Option<f64>,

    /// Carrier amplitude (0.1 to 5.0).
    #[arg(long)]
    ac: Option<f64>,
}

impl ParamArgs {
    fn resolve(&self, defaults: &AmParams) -> Result<AmParams> {
        let params = AmParams::new(
            self.fm.unwrap_or(defaults.message_freq),
            self.am.unwrap_or(defaults.message_amp),
            self.ac.unwrap_or(defaults.carrier_amp),
        )?;
        Ok(params)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample every trace over one second.
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit the full grid instead of the display window.
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Compute the modulation index μ = Am / Ac and classify it.
    Classify {
        /// Message amplitude.
        #[arg(long)]
        am: f64,

        /// Carrier amplitude.
        #[arg(long)]
        ac: f64,
    },
    /// Print sidebands, bandwidth, power budget and envelope extremes.
    Analyze {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print one educational topic, or all of them.
    Explain {
        /// Topic slug (what-is-am, math, modulation-index, applications, am-vs-fm).
        topic: Option<String>,
    },
    /// Configuration file commands.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML.
    Show,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warn };
    logging::init_logging(&LogConfig::stderr(level))?;

    match cli.command {
        Commands::Generate {
            params,
            format,
            output,
            all,
        } => {
            let config = load_config(cli.config.as_deref())?;
            run_generate(&config, &params, format, output.as_deref(), all)
        }
        Commands::Classify { am, ac } => run_classify(am, ac),
        Commands::Analyze { params } => {
            let config = load_config(cli.config.as_deref())?;
            run_analyze(&config, &params)
        }
        Commands::Explain { topic } => run_explain(topic.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(cli.config.as_deref()),
            ConfigAction::Init { force } => run_config_init(cli.config, force),
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<LabConfig> {
    LabConfig::load(path).context("loading configuration")
}

fn run_generate(
    config: &LabConfig,
    args: &ParamArgs,
    format: OutputFormat,
    output: Option<&Path>,
    all: bool,
) -> Result<()> {
    let params = args.resolve(&config.defaults)?;
    let full = Waveforms::generate(&params, &config.signal);
    let waveforms = if all {
        full
    } else {
        full.display(&config.signal).to_waveforms()
    };

    let rendered = match format {
        OutputFormat::Table => render_table(&params, &config.signal, &waveforms),
        OutputFormat::Csv => export::export_csv(&waveforms)?,
        OutputFormat::Json => {
            let report = WaveformReport::new(params, config.signal, waveforms);
            export::export_json(&report)?
        }
    };

    match output {
        Some(path) => {
            export::write_to(path, &rendered)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_table(
    params: &AmParams,
    signal: &amlab_core::SignalConfig,
    waveforms: &Waveforms,
) -> String {
    let analysis = AmAnalysis::of(params, signal);
    let mut out = String::new();
    out.push_str(&format!(
        "fm = {:.1} Hz  Am = {:.1}  Ac = {:.1}  fc = {} Hz\n",
        params.message_freq, params.message_amp, params.carrier_amp, signal.carrier_freq
    ));
    out.push_str(&format!(
        "μ = {}  {} ({})\n\n",
        analysis.index,
        analysis.kind.label(),
        analysis.kind.condition()
    ));

    out.push_str(&format!("{:>7}", "t"));
    for trace in Trace::ALL {
        out.push_str(&format!(" {:>15}", trace.label()));
    }
    out.push('\n');
    out.push_str(&"-".repeat(7 + 16 * Trace::ALL.len()));
    out.push('\n');

    for i in 0..waveforms.len() {
        out.push_str(&format!("{:>7.3}", waveforms.time[i]));
        for trace in Trace::ALL {
            out.push_str(&format!(" {:>15.4}", waveforms.trace(trace)[i]));
        }
        out.push('\n');
    }
    out
}

fn run_classify(am: f64, ac: f64) -> Result<()> {
    let index = ModulationIndex::from_amplitudes(am, ac)?;
    let kind = index.kind();
    println!("μ = {index} ({:.0}%)", index.percent());
    println!("{} ({})", kind.label(), kind.condition());
    println!("{}", kind.description());
    Ok(())
}

fn run_analyze(config: &LabConfig, args: &ParamArgs) -> Result<()> {
    let params = args.resolve(&config.defaults)?;
    print!("{}", render_analysis(&params, &config.signal));
    Ok(())
}

fn render_analysis(params: &AmParams, signal: &amlab_core::SignalConfig) -> String {
    let a = AmAnalysis::of(params, signal);
    let mut out = String::new();
    out.push_str(&format!(
        "Parameters: fm = {:.1} Hz, Am = {:.1}, Ac = {:.1}, fc = {} Hz\n\n",
        params.message_freq, params.message_amp, params.carrier_amp, a.spectrum.carrier
    ));
    out.push_str(&format!("Modulation index:  {}  ({})\n\n", a.index, a.kind.label()));

    out.push_str("Spectrum\n");
    for (label, hz) in [
        ("Lower sideband", a.spectrum.lower_sideband),
        ("Carrier", a.spectrum.carrier),
        ("Upper sideband", a.spectrum.upper_sideband),
        ("Bandwidth", a.spectrum.bandwidth),
    ] {
        out.push_str(&format!("  {label:<18} {hz:>10.2} Hz\n"));
    }

    out.push_str("\nPower (1 Ω)\n");
    out.push_str(&format!("  {:<18} {:>10.4}\n", "Carrier", a.power.carrier));
    out.push_str(&format!("  {:<18} {:>10.4}\n", "Sidebands", a.power.sidebands));
    out.push_str(&format!("  {:<18} {:>10.4}\n", "Total", a.power.total));
    out.push_str(&format!(
        "  {:<18} {:>9.1}%\n",
        "Efficiency",
        a.power.efficiency * 100.0
    ));

    out.push_str("\nEnvelope\n");
    out.push_str(&format!("  {:<18} {:>10.4}\n", "Peak", a.envelope.peak));
    out.push_str(&format!("  {:<18} {:>10.4}\n", "Trough", a.envelope.trough));
    if a.envelope.crosses_zero {
        out.push_str(
            "  The envelope crosses zero: the carrier phase reverses and an envelope detector distorts.\n",
        );
    }
    out
}

fn run_explain(slug: Option<&str>) -> Result<()> {
    match slug {
        Some(slug) => {
            let Some(topic) = content::topic(slug) else {
                let valid: Vec<&str> = content::slugs().collect();
                bail!("unknown topic '{slug}'. Valid: {}", valid.join(", "));
            };
            print!("{}", content::render_plain(topic));
        }
        None => {
            for (i, topic) in content::TOPICS.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", content::render_plain(topic));
            }
        }
    }
    Ok(())
}

fn run_config_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn run_config_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let Some(path) = path.or_else(default_config_path) else {
        bail!("no config directory on this platform; pass --config <path>");
    };
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, LabConfig::default().to_toml()?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn param_args_fall_back_to_defaults() {
        let args = ParamArgs {
            fm: Some(5.0),
            am: None,
            ac: None,
        };
        let p = args.resolve(&AmParams::default()).unwrap();
        assert_eq!(p.message_freq, 5.0);
        assert_eq!(p.message_amp, 1.0);
    }

    #[test]
    fn out_of_range_args_rejected() {
        let args = ParamArgs {
            fm: None,
            am: None,
            ac: Some(0.0),
        };
        assert!(args.resolve(&AmParams::default()).is_err());
    }

    #[test]
    fn table_has_header_and_window_rows() {
        let config = LabConfig::default();
        let params = AmParams::default();
        let w = Waveforms::generate(&params, &config.signal)
            .display(&config.signal)
            .to_waveforms();
        let table = render_table(&params, &config.signal, &w);
        assert!(table.contains("μ = 1.00"));
        assert!(table.contains("Critically modulated"));
        // two header lines, blank line, column header, rule, 100 rows
        assert_eq!(table.lines().count(), 105);
    }

    fn default_args() -> ParamArgs {
        ParamArgs {
            fm: None,
            am: None,
            ac: None,
        }
    }

    #[test]
    fn generate_csv_writes_window_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("am.csv");
        let config = LabConfig::default();

        run_generate(&config, &default_args(), OutputFormat::Csv, Some(&path), false).unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        // header + display window
        assert_eq!(csv.lines().count(), 101);
        assert!(csv.starts_with("t,message,carrier,modulated,upper_envelope,lower_envelope"));

        run_generate(&config, &default_args(), OutputFormat::Csv, Some(&path), true).unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 1001);
    }

    #[test]
    fn generate_json_report_describes_its_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("am.json");
        let config = LabConfig::default();
        let args = ParamArgs {
            fm: Some(3.0),
            am: Some(2.0),
            ac: Some(1.0),
        };

        run_generate(&config, &args, OutputFormat::Json, Some(&path), false).unwrap();
        let report = export::import_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.params, AmParams::new(3.0, 2.0, 1.0).unwrap());
        assert_eq!(report.waveforms.len(), 100);
        assert_eq!(report.config.sample_count, 1000);
        assert!(report.is_windowed());
        assert_eq!(report.waveforms.time[1], 1.0 / 1000.0);
        assert_eq!(report.analysis.kind, amlab_core::ModulationKind::OverModulated);

        run_generate(&config, &args, OutputFormat::Json, Some(&path), true).unwrap();
        let report = export::import_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.waveforms.len(), 1000);
        assert!(!report.is_windowed());
    }

    #[test]
    fn generate_table_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("am.txt");
        run_generate(
            &LabConfig::default(),
            &default_args(),
            OutputFormat::Table,
            Some(&path),
            false,
        )
        .unwrap();
        let table = std::fs::read_to_string(&path).unwrap();
        assert!(table.starts_with("fm = 2.0 Hz"));
        assert_eq!(table.lines().count(), 105);
    }

    #[test]
    fn generate_rejects_out_of_range_carrier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("am.csv");
        let args = ParamArgs {
            fm: None,
            am: None,
            ac: Some(0.0),
        };
        let result = run_generate(
            &LabConfig::default(),
            &args,
            OutputFormat::Csv,
            Some(&path),
            false,
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn analyze_reports_sidebands_and_power() {
        let config = LabConfig::default();
        assert!(run_analyze(&config, &default_args()).is_ok());

        let params = AmParams::default();
        let text = render_analysis(&params, &config.signal);
        assert!(text.contains("Modulation index:  1.00"));
        assert!(text.contains("Critically modulated"));
        // fc = 20, fm = 2: sidebands at 18 and 22, bandwidth 4
        assert!(text.contains("18.00 Hz"));
        assert!(text.contains("22.00 Hz"));
        assert!(text.contains("4.00 Hz"));
        // μ = 1: efficiency 1/3
        assert!(text.contains("33.3%"));
        assert!(!text.contains("crosses zero"));

        let over = AmParams::new(2.0, 2.0, 1.0).unwrap();
        assert!(render_analysis(&over, &config.signal).contains("crosses zero"));
    }

    #[test]
    fn analyze_rejects_out_of_range_frequency() {
        let args = ParamArgs {
            fm: Some(50.0),
            am: None,
            ac: None,
        };
        assert!(run_analyze(&LabConfig::default(), &args).is_err());
    }

    #[test]
    fn classify_rejects_zero_carrier() {
        assert!(run_classify(1.0, 0.0).is_err());
        assert!(run_classify(1.0, 2.0).is_ok());
    }

    #[test]
    fn unknown_topic_fails() {
        assert!(run_explain(Some("fm-theory")).is_err());
        assert!(run_explain(Some("math")).is_ok());
    }

    #[test]
    fn config_init_respects_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("amlab").join("config.toml");
        run_config_init(Some(path.clone()), false).unwrap();
        assert!(run_config_init(Some(path.clone()), false).is_err());
        run_config_init(Some(path.clone()), true).unwrap();
        assert_eq!(LabConfig::from_file(&path).unwrap(), LabConfig::default());
    }
}
