//! policy-runner: headless runner for the sea-level policy simulator.
//!
//! Usage:
//!   policy-runner --carbon-reduction 60 --renewable 80 --policies building_efficiency,green_tech_rnd
//!   policy-runner --data-dir ./data --ipc-mode

use anyhow::Result;
use std::collections::BTreeSet;
use std::env;
use std::io::{self, BufRead, Write};
use tideline_core::{
    checklist::{ActionItem, ChecklistProgress},
    config::{Dial, SimConfig},
    engine::{Evaluation, PolicySimulator},
    policy::RawPolicyInputs,
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    SetDial {
        dial: Dial,
        value: f64,
    },
    SetPolicies {
        policies: Vec<String>,
    },
    ToggleAction {
        key: String,
    },
    Reset,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    evaluation: &'a Evaluation,
    completed_actions: &'a BTreeSet<ActionItem>,
    checklist: ChecklistProgress,
}

/// The widget snapshot the runner holds between commands.
/// Every change re-evaluates from scratch.
struct Session {
    simulator: PolicySimulator,
    raw: RawPolicyInputs,
    completed_actions: BTreeSet<ActionItem>,
    evaluation: Evaluation,
}

impl Session {
    fn new(simulator: PolicySimulator, raw: RawPolicyInputs) -> Self {
        let evaluation = simulator.evaluate(&raw);
        Self {
            simulator,
            raw,
            completed_actions: BTreeSet::new(),
            evaluation,
        }
    }

    fn reevaluate(&mut self) {
        self.evaluation = self.simulator.evaluate(&self.raw);
    }

    fn ui_state(&self) -> UiState<'_> {
        UiState {
            evaluation: &self.evaluation,
            completed_actions: &self.completed_actions,
            checklist: ChecklistProgress::from_completed(&self.completed_actions),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let config = match find_arg(&args, "--data-dir") {
        Some(data_dir) => SimConfig::load(data_dir)?,
        None => SimConfig::standard(),
    };
    let simulator = PolicySimulator::new(config);

    let mut raw = simulator.default_inputs();
    let flags = [
        ("--carbon-reduction", Dial::CarbonReductionPct),
        ("--renewable",        Dial::RenewableEnergyPct),
        ("--carbon-tax",       Dial::CarbonTaxPerTon),
        ("--sea-wall",         Dial::SeaWallInvestmentTrillion),
        ("--ecosystem",        Dial::EcosystemRestorationPct),
    ];
    for (flag, dial) in flags {
        let value = parse_arg(&args, flag, raw.get(dial));
        raw.set(dial, value);
    }
    if let Some(list) = find_arg(&args, "--policies") {
        raw.selected_policies = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    let mut session = Session::new(simulator, raw);

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else {
        print_summary(&session.evaluation);
    }

    Ok(())
}

fn run_ipc_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::SetDial { dial, value } => {
                session.raw.set(dial, value);
                session.reevaluate();
            }
            IpcCommand::SetPolicies { policies } => {
                session.raw.selected_policies = policies;
                session.reevaluate();
            }
            IpcCommand::ToggleAction { key } => match key.parse::<ActionItem>() {
                Ok(item) => {
                    if !session.completed_actions.remove(&item) {
                        session.completed_actions.insert(item);
                    }
                }
                Err(e) => {
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            },
            IpcCommand::Reset => {
                session.raw = session.simulator.default_inputs();
                session.completed_actions.clear();
                session.reevaluate();
            }
        }

        writeln!(stdout, "{}", serde_json::to_string(&session.ui_state())?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    log::warn!("Rejected IPC line: {message}");
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn print_summary(evaluation: &Evaluation) {
    let inputs = &evaluation.inputs;
    let result = &evaluation.result;

    println!("Sea-Level Policy Simulator: policy-runner");
    println!("  carbon reduction: {:.0}%", inputs.carbon_reduction_pct);
    println!("  renewable share:  {:.0}%", inputs.renewable_energy_pct);
    println!("  carbon tax:       {:.0} KRW/t", inputs.carbon_tax_per_ton);
    println!("  sea wall:         {:.0} trillion KRW", inputs.sea_wall_investment_trillion);
    println!("  ecosystem:        {:.0}%", inputs.ecosystem_restoration_pct);
    let policies: Vec<&str> = inputs.selected_policies.iter().map(|p| p.key()).collect();
    println!("  policies:         [{}]", policies.join(", "));
    for adjustment in &evaluation.adjustments {
        println!("  adjusted:         {adjustment:?}");
    }
    println!();

    println!("=== RESULT ===");
    println!(
        "  2050 rise:        {:.1} cm ({:+.1} cm vs current trend)",
        result.projected_rise_cm, result.delta_vs_trend_cm
    );
    println!("  adaptation score: {:.1}", result.adaptation_score);
    println!("  grade:            {}", result.grade.label());
    for line in &evaluation.banner.lines {
        println!("  {line}");
    }

    println!();
    println!("=== TRAJECTORY ===");
    for point in &evaluation.trajectory {
        println!(
            "  {} | trend: {:>5.1} cm | yours: {:>5.1} cm",
            point.year, point.baseline_cm, point.scenario_cm
        );
    }

    println!();
    println!("=== CONTRIBUTIONS ===");
    for bar in evaluation.breakdown.contributions() {
        println!("  {:<24} {:+.2} cm", bar.label, bar.effect_cm);
    }

    println!();
    println!("=== SUGGESTIONS ===");
    if evaluation.fully_optimized() {
        println!("  All policies are optimized!");
    } else {
        for suggestion in &evaluation.suggestions {
            println!("  - {}", suggestion.message());
        }
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
