use std::io;

use clap::{Parser, ValueEnum};
use color_eyre::Result;

use truthtab::config::EvalConfig;
use truthtab::node::Node;
use truthtab::report::LineReport;
use truthtab::table::Enumerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Formula {
    /// p => q
    Implies,
    /// q => p
    Converse,
    /// p OR q
    Or,
    /// p AND q
    And,
    /// (p => q) OR k
    ImpliesOr,
    /// p AND (p OR k) OR s
    Absorption,
    /// ~p
    Not,
    /// p => (p OR k)
    Weakening,
    /// ~(p AND q)
    NotAnd,
    /// p NAND q
    Nand,
    /// ~(p OR q)
    NotOr,
    /// p NOR q
    Nor,
    /// ~(p XOR q)
    Equiv,
    /// ~TRUE
    NotTrue,
}

impl Formula {
    fn build(self) -> Node {
        let p = || Node::symbol("p");
        let q = || Node::symbol("q");
        let k = || Node::symbol("k");
        match self {
            Formula::Implies => Node::implies(p(), q()),
            Formula::Converse => Node::implies(q(), p()),
            Formula::Or => Node::or(p(), q()),
            Formula::And => Node::and(p(), q()),
            Formula::ImpliesOr => Node::or(Node::implies(p(), q()), k()),
            Formula::Absorption => Node::or(Node::and(p(), Node::or(p(), k())), Node::symbol("s")),
            Formula::Not => Node::not(p()),
            Formula::Weakening => Node::implies(p(), Node::or(p(), k())),
            Formula::NotAnd => Node::not(Node::and(p(), q())),
            Formula::Nand => Node::nand(p(), q()),
            Formula::NotOr => Node::not(Node::or(p(), q())),
            Formula::Nor => Node::nor(p(), q()),
            Formula::Equiv => Node::not(Node::xor(p(), q())),
            Formula::NotTrue => Node::not(Node::top()),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version)]
#[command(about = "Print the truth table of a propositional formula", long_about = None)]
struct Cli {
    /// Formulas to tabulate.
    #[arg(value_enum, default_values_t = [Formula::Implies])]
    formulas: Vec<Formula>,

    /// Reject NOR, NAND and XOR instead of evaluating them.
    #[clap(long)]
    strict: bool,

    /// Report failing rows and continue instead of aborting.
    #[clap(long)]
    keep_going: bool,

    /// Label every formula with this name instead of its rendering.
    #[clap(long, value_name = "STR")]
    name: Option<String>,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = EvalConfig::default();
    if args.strict {
        config = config.strict();
    }
    if args.keep_going {
        config = config.keep_going();
    }

    let mut report = LineReport::new(io::stdout().lock());
    for formula in args.formulas {
        let mut root = formula.build();
        if let Some(name) = &args.name {
            root = root.with_name(name.clone());
        }
        let driver = Enumerator::for_formula(&root, config);
        log::info!("{:?}: {} variable(s), {} row(s)", formula, driver.vars().len(), driver.row_count());
        driver.run(&mut report)?;
    }

    Ok(())
}
