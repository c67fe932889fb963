use clap::{Parser, ValueEnum};
use colored::{Color, Colorize};
use rd_series::Series;
use rd_solver::{
    Candidate, Direction, HeldVoltage, MAX_TOTAL_RESISTANCE, ScaledLeg, Severity, SweepContext,
    sweep,
};

#[derive(Parser)]
#[command(name = "rd-cli")]
#[command(about = "resdiv CLI - E-series voltage divider pair finder", long_about = None)]
struct Cli {
    /// Resistor series: E3, E6, E12, E24, E48, E96 or E192
    #[arg(long)]
    series: Series,

    /// Supply voltage in volts
    #[arg(long)]
    vcc: f64,

    /// Divider output voltage in volts; must be below vcc
    #[arg(long)]
    vout: f64,

    /// Which voltage is held constant while the other is computed
    #[arg(long, value_enum, default_value_t = HoldArg::Vcc)]
    hold: HoldArg,

    /// Evaluate the standard value below, above, or on both sides of each
    /// ideal leg
    #[arg(long, value_enum, default_value_t = DirectionArg::Both)]
    direction: DirectionArg,

    /// Minimum total resistance in ohms
    #[arg(long, default_value_t = 1)]
    min: u32,

    /// Maximum total resistance in ohms
    #[arg(long, default_value_t = MAX_TOTAL_RESISTANCE)]
    max: u32,

    /// Emit candidates as JSON instead of the colored table
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum HoldArg {
    Vcc,
    Vout,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Lower,
    Higher,
    Both,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let held = match cli.hold {
        HoldArg::Vcc => HeldVoltage::Vcc,
        HoldArg::Vout => HeldVoltage::Vout,
    };
    let direction = match cli.direction {
        DirectionArg::Lower => Direction::Lower,
        DirectionArg::Higher => Direction::Higher,
        DirectionArg::Both => Direction::Both,
    };

    let ctx = SweepContext::new(
        cli.series, cli.vcc, cli.vout, held, direction, cli.min, cli.max,
    )?;
    let candidates = sweep(&ctx);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    print_header(&ctx);
    if candidates.is_empty() {
        println!("No feasible pairs inside the resistance window.");
        return Ok(());
    }
    for candidate in &candidates {
        print_candidate(&ctx, candidate);
    }
    Ok(())
}

fn print_header(ctx: &SweepContext) {
    println!("Series: {}", ctx.series.label());
    println!(
        "Vcc: {}V  Vout: {}V  holding {} constant",
        ctx.vcc,
        ctx.vout,
        match ctx.held {
            HeldVoltage::Vcc => "Vcc",
            HeldVoltage::Vout => "Vout",
        }
    );
    println!(
        "Total resistance window: {} - {} ohm",
        ctx.min_total, ctx.max_total
    );
    println!(
        "Error colors: {}    {}    {}    {}    {}    {}\n",
        paint("< 0.01%", Severity::Negligible),
        paint("< 1%", Severity::Low),
        paint("1-2%", Severity::Moderate),
        paint("> 2%", Severity::Elevated),
        paint("> 5%", Severity::High),
        paint("> 10%", Severity::Extreme),
    );
}

fn print_candidate(ctx: &SweepContext, candidate: &Candidate) {
    let computed = match ctx.held {
        HeldVoltage::Vcc => "Vout",
        HeldVoltage::Vout => "Vcc",
    };
    let line = format!(
        "R1: {:>8}  R2: {:>8}  {} error: {:+6.2}%  worst: {:+6.2}% / {:+6.2}%  dV: {:+.3}V",
        format_leg(&candidate.leg1),
        format_leg(&candidate.leg2),
        computed,
        candidate.error.nominal_pct,
        candidate.error.min_pct,
        candidate.error.max_pct,
        candidate.error.nominal_volts,
    );
    println!("{}", paint(&line, candidate.severity));
}

fn format_leg(leg: &ScaledLeg) -> String {
    format!("{:.*}{}", leg.precision, leg.display_value(), leg.unit)
}

fn paint(text: &str, severity: Severity) -> colored::ColoredString {
    let color = match severity {
        Severity::Negligible => Color::BrightGreen,
        Severity::Low => Color::Green,
        Severity::Moderate => Color::White,
        Severity::Elevated => Color::BrightYellow,
        Severity::High => Color::BrightRed,
        Severity::Extreme => Color::Red,
    };
    text.color(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_formatting_honors_precision_and_unit() {
        let leg = ScaledLeg {
            mantissa: 100,
            correction: -2,
            unit: 'K',
            precision: 1,
        };
        assert_eq!(format_leg(&leg), "1.0K");
    }
}
