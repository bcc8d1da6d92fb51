//! rusty-calculator CLI - command-line front end for the formula library
//!
//! ## Example Usage
//!
//! ```bash
//! # Basic arithmetic
//! rusty-calculator basic 15 divide 3
//!
//! # Trigonometry in degrees
//! rusty-calculator trig sin 30 --degrees
//!
//! # Currency conversion with a custom rate table
//! rusty-calculator --config rates.toml fx 100 USD EUR
//!
//! # Guided tour of every formula family
//! rusty-calculator demo
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_calculator::api::{BasicOp, TrigFunc};
use rusty_calculator::arithmetic::{self, average, maximum, minimum, product};
use rusty_calculator::config::CalculatorConfig;
use rusty_calculator::currency::{self, currency_symbol, RateTable};
use rusty_calculator::error::{CalcError, Result as CalcResult};
use rusty_calculator::finance::{
    calculate_compound_interest, calculate_loan_payment, calculate_simple_interest,
    DEFAULT_COMPOUNDS_PER_YEAR, DEFAULT_PAYMENTS_PER_YEAR,
};
use rusty_calculator::number_theory::{binomial_coefficient, fibonacci, gcd, is_prime, lcm};
use rusty_calculator::trigonometry::{self as trig, AngleUnit};
use std::f64::consts::PI;
use std::path::PathBuf;
use std::process;

/// rusty-calculator: arithmetic, trigonometry, FX and finance formulas
#[derive(Parser)]
#[command(name = "rusty-calculator")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Robert Fall")]
#[command(about = "Arithmetic, trigonometry, FX and finance formulas", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (rate table)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a binary operation: add, subtract, multiply, divide
    Basic {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        op: String,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// Evaluate sin, cos or tan
    Trig {
        func: String,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
        /// Interpret the angle in degrees
        #[arg(short = 'd', long)]
        degrees: bool,
    },

    /// Convert an amount between currencies
    Fx {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        from: String,
        to: String,
    },

    /// List supported currencies and their rates
    Currencies,

    /// Percentage spread between a buy and a sell rate
    Spread { buy_rate: f64, sell_rate: f64 },

    /// Compound and simple interest
    Interest {
        principal: f64,
        /// Annual rate as a decimal (0.05 = 5%)
        rate: f64,
        /// Time in years
        time: f64,
        #[arg(short = 'n', long, default_value_t = DEFAULT_COMPOUNDS_PER_YEAR)]
        compounds_per_year: u32,
    },

    /// Amortizing loan payment per period
    Loan {
        principal: f64,
        /// Annual rate as a decimal (0.04 = 4%)
        rate: f64,
        /// Term in years
        time: f64,
        #[arg(short = 'p', long, default_value_t = DEFAULT_PAYMENTS_PER_YEAR)]
        payments_per_year: u32,
    },

    /// Aggregate a list of numbers
    Stats {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<f64>,
    },

    /// Integer formulas
    Number {
        #[command(subcommand)]
        action: NumberAction,
    },

    /// Print a tour of every formula family
    Demo,
}

#[derive(Subcommand)]
enum NumberAction {
    Gcd { a: i64, b: i64 },
    Lcm { a: i64, b: i64 },
    Prime { n: i64 },
    Fib { n: i64 },
    Binomial { n: i64, k: i64 },
    Factorial { n: f64 },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let rates = match load_rates(cli.config.as_deref()) {
        Ok(rates) => rates,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    if cli.verbose {
        println!(
            "{} v{}",
            "rusty-calculator".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!(
            "Rate table: {} currencies relative to {}",
            rates.len(),
            rates.reference()
        );
    }

    let result = match cli.command {
        Commands::Basic { a, op, b } => cmd_basic(a, &op, b),
        Commands::Trig {
            func,
            angle,
            degrees,
        } => cmd_trig(&func, angle, degrees),
        Commands::Fx { amount, from, to } => cmd_fx(&rates, amount, &from, &to),
        Commands::Currencies => cmd_currencies(&rates),
        Commands::Spread {
            buy_rate,
            sell_rate,
        } => cmd_spread(buy_rate, sell_rate),
        Commands::Interest {
            principal,
            rate,
            time,
            compounds_per_year,
        } => cmd_interest(principal, rate, time, compounds_per_year),
        Commands::Loan {
            principal,
            rate,
            time,
            payments_per_year,
        } => cmd_loan(principal, rate, time, payments_per_year),
        Commands::Stats { values } => cmd_stats(&values),
        Commands::Number { action } => cmd_number(action),
        Commands::Demo => cmd_demo(&rates),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn load_rates(path: Option<&std::path::Path>) -> CalcResult<RateTable> {
    let config = CalculatorConfig::load(path)?;
    config.rate_table()
}

fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{}:", label).bold(), value.to_string().green());
}

fn cmd_basic(a: f64, op: &str, b: f64) -> CalcResult<()> {
    let op: BasicOp = op.parse()?;
    let result = op.apply(a, b)?;
    print_result(&format!("{} {} {}", a, op.symbol(), b), result);
    Ok(())
}

fn cmd_trig(func: &str, angle: f64, degrees: bool) -> CalcResult<()> {
    let func: TrigFunc = func.parse()?;
    let result = func.apply(angle, AngleUnit::from_degrees_flag(degrees));
    let suffix = if degrees { "°" } else { "" };
    print_result(&format!("{}({}{})", func, angle, suffix), format!("{:.6}", result));
    Ok(())
}

fn format_amount(amount: f64, code: &str) -> String {
    match currency_symbol(code) {
        Some(symbol) => format!("{}{:.2} {}", symbol, amount, code.to_uppercase()),
        None => format!("{:.2} {}", amount, code.to_uppercase()),
    }
}

fn cmd_fx(rates: &RateTable, amount: f64, from: &str, to: &str) -> CalcResult<()> {
    let converted = rates.convert(amount, from, to)?;
    print_result(&format_amount(amount, from), format_amount(converted, to));
    Ok(())
}

fn cmd_currencies(rates: &RateTable) -> CalcResult<()> {
    println!("{}", "Supported currencies".cyan().bold());
    println!("{}", "=".repeat(40));
    for entry in rates.entries() {
        println!(
            "  {:<5} {:>6} {:>12.4}",
            entry.code.bold(),
            currency_symbol(&entry.code).unwrap_or(""),
            entry.rate
        );
    }
    println!("\nRates are per 1 {}", rates.reference());
    Ok(())
}

fn cmd_spread(buy_rate: f64, sell_rate: f64) -> CalcResult<()> {
    let spread = currency::calculate_currency_spread(buy_rate, sell_rate)?;
    print_result("Spread", format!("{:.4}%", spread));
    Ok(())
}

fn cmd_interest(principal: f64, rate: f64, time: f64, compounds_per_year: u32) -> CalcResult<()> {
    let compound = calculate_compound_interest(principal, rate, time, compounds_per_year)?;
    let simple = calculate_simple_interest(principal, rate, time);
    print_result("Compound amount", format!("{:.2}", compound));
    print_result("Compound interest", format!("{:.2}", compound - principal));
    print_result("Simple interest", format!("{:.2}", simple));
    Ok(())
}

fn cmd_loan(principal: f64, rate: f64, time: f64, payments_per_year: u32) -> CalcResult<()> {
    let payment = calculate_loan_payment(principal, rate, time, payments_per_year)?;
    let total = payment * time * payments_per_year as f64;
    print_result("Payment per period", format!("{:.2}", payment));
    print_result("Total paid", format!("{:.2}", total));
    print_result("Total interest", format!("{:.2}", total - principal));
    Ok(())
}

fn cmd_stats(values: &[f64]) -> CalcResult<()> {
    print_result("Average", average(values)?);
    print_result("Maximum", maximum(values)?);
    print_result("Minimum", minimum(values)?);
    print_result("Product", product(values)?);
    Ok(())
}

fn cmd_number(action: NumberAction) -> CalcResult<()> {
    match action {
        NumberAction::Gcd { a, b } => print_result(&format!("GCD({}, {})", a, b), gcd(a, b)),
        NumberAction::Lcm { a, b } => print_result(&format!("LCM({}, {})", a, b), lcm(a, b)?),
        NumberAction::Prime { n } => {
            let status = if is_prime(n) { "prime" } else { "not prime" };
            print_result(&n.to_string(), status);
        }
        NumberAction::Fib { n } => print_result(&format!("F({})", n), fibonacci(n)?),
        NumberAction::Binomial { n, k } => {
            print_result(&format!("C({}, {})", n, k), binomial_coefficient(n, k)?)
        }
        NumberAction::Factorial { n } => {
            print_result(&format!("{}!", n), arithmetic::factorial(n)?)
        }
    }
    Ok(())
}

fn section(title: &str) {
    println!("{}", format!("=== {} ===", title).cyan().bold());
}

fn cmd_demo(rates: &RateTable) -> CalcResult<()> {
    println!("{}", "Calculator Demo".bold());
    println!("{}\n", "=".repeat(50));

    section("Basic Arithmetic Operations");
    println!("Addition: 5 + 3 = {}", arithmetic::add(5.0, 3.0));
    println!("Subtraction: 10 - 4 = {}", arithmetic::subtract(10.0, 4.0));
    println!("Multiplication: 6 × 7 = {}", arithmetic::multiply(6.0, 7.0));
    println!("Division: 15 ÷ 3 = {}", arithmetic::divide(15.0, 3.0)?);
    println!("Power: 2^8 = {}", arithmetic::power(2.0, 8.0));
    println!("Square root: √16 = {}", arithmetic::sqrt(16.0)?);
    println!("Factorial: 5! = {}", arithmetic::factorial(5.0)?);
    println!();

    section("Trigonometric Functions");
    let angle = 30.0;
    println!("sin({}°) = {:.4}", angle, trig::sin(angle, AngleUnit::Degrees));
    println!("cos({}°) = {:.4}", angle, trig::cos(angle, AngleUnit::Degrees));
    println!("tan({}°) = {:.4}", angle, trig::tan(angle, AngleUnit::Degrees));
    let value = 0.5;
    let asin = trig::asin(value)?;
    let acos = trig::acos(value)?;
    let atan = trig::atan(value);
    println!(
        "arcsin({}) = {:.4} radians = {:.2}°",
        value,
        asin,
        trig::radians_to_degrees(asin)
    );
    println!(
        "arccos({}) = {:.4} radians = {:.2}°",
        value,
        acos,
        trig::radians_to_degrees(acos)
    );
    println!(
        "arctan({}) = {:.4} radians = {:.2}°",
        value,
        atan,
        trig::radians_to_degrees(atan)
    );
    let x = 1.5;
    println!("sinh({}) = {:.4}", x, trig::sinh(x));
    println!("cosh({}) = {:.4}", x, trig::cosh(x));
    println!("tanh({}) = {:.4}", x, trig::tanh(x));
    println!("180° = {:.4} radians", trig::degrees_to_radians(180.0));
    println!("{} radians = {:.2}°", PI, trig::radians_to_degrees(PI));
    println!();

    section("Foreign Exchange Calculations");
    let conversions = [
        (100.0, "USD", "EUR"),
        (50.0, "USD", "GBP"),
        (1000.0, "EUR", "JPY"),
        (25.0, "CAD", "AUD"),
        (500.0, "USD", "INR"),
    ];
    for (amount, from, to) in conversions {
        match rates.convert(amount, from, to) {
            Ok(converted) => println!("{} {} = {:.2} {}", amount, from, converted, to),
            Err(e) => println!("{} {} -> {}: {}", amount, from, to, e.to_string().yellow()),
        }
    }
    let spread = currency::calculate_currency_spread(1.20, 1.25)?;
    println!("Currency spread: {:.2}%", spread);
    let codes = rates.codes();
    let shown = codes.len().min(10);
    println!(
        "Supported currencies: {}... (and {} more)",
        codes[..shown].join(", "),
        codes.len() - shown
    );
    println!();

    section("Financial Calculations");
    let (principal, rate, time) = (10_000.0, 0.05, 5.0);
    let annual = calculate_compound_interest(principal, rate, time, 1)?;
    println!(
        "Compound interest: ${} at {}% for {} years = ${:.2}",
        principal,
        rate * 100.0,
        time,
        annual
    );
    let monthly = calculate_compound_interest(principal, rate, time, 12)?;
    println!("Monthly compounded: ${:.2}", monthly);
    println!(
        "Simple interest earned: ${:.2}",
        calculate_simple_interest(principal, rate, time)
    );
    let payment = calculate_loan_payment(200_000.0, 0.04, 30.0, DEFAULT_PAYMENTS_PER_YEAR)?;
    println!(
        "Monthly loan payment: ${:.2} for $200,000 loan at 4% for 30 years",
        payment
    );
    println!();

    section("Advanced Mathematical Functions");
    println!("GCD(48, 18) = {}", gcd(48, 18));
    println!("LCM(48, 18) = {}", lcm(48, 18)?);
    for n in [2, 3, 4, 17, 25, 29, 100] {
        let status = if is_prime(n) { "prime" } else { "not prime" };
        println!("{} is {}", n, status);
    }
    let fibs = (0..10)
        .map(|i| fibonacci(i).map(|f| f.to_string()))
        .collect::<CalcResult<Vec<_>>>()?;
    println!("Fibonacci sequence (first 10): {}", fibs.join(" "));
    println!("Binomial coefficient C(5,2) = {}", binomial_coefficient(5, 2)?);
    let numbers: Vec<f64> = (1..=10).map(f64::from).collect();
    println!("Average of 1..=10: {}", average(&numbers)?);
    println!("Maximum: {}", maximum(&numbers)?);
    println!("Minimum: {}", minimum(&numbers)?);
    println!("Product: {}", product(&numbers)?);
    println!();

    section("Error Handling Examples");
    let failures: [CalcResult<f64>; 4] = [
        arithmetic::divide(10.0, 0.0),
        arithmetic::sqrt(-4.0),
        rates.convert(100.0, "USD", "XYZ"),
        trig::asin(2.0),
    ];
    for failure in failures {
        if let Err(e) = failure {
            report_caught(&e);
        }
    }
    println!();

    println!("{}", "Demo completed!".green().bold());
    Ok(())
}

fn report_caught(err: &CalcError) {
    println!("{} {}", "Error caught:".yellow(), err);
}
