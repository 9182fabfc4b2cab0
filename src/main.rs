use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use rand::Rng;

use candle_coach::classifier::classify;
use candle_coach::config::Config;
use candle_coach::input::{parse_quiz_command, QuizCommand};
use candle_coach::journal;
use candle_coach::model::candle::Candle;
use candle_coach::patterns::PatternCatalog;
use candle_coach::quiz::{GuessOutcome, QuizSession};

const USAGE: &str = "\
candle-coach <command>

Commands:
  classify <open> <high> <low> <close>   classify one OHLC candle
  summarize [path] [--by-strategy] [--json]
                                         summarize a trade journal CSV
  quiz [--questions N] [--seed N]        interactive candle quiz
  cards                                  print the flashcard deck
";

fn main() -> Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print!("{USAGE}");
        return Ok(());
    };

    match command {
        "classify" => run_classify(&args[1..]),
        "summarize" => run_summarize(&config, &args[1..]),
        "quiz" => run_quiz(&config, &args[1..]),
        "cards" => run_cards(),
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
            Ok(())
        }
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}

fn run_classify(args: &[String]) -> Result<()> {
    if args.len() != 4 {
        bail!("classify expects: <open> <high> <low> <close>");
    }
    let mut fields = [0.0f64; 4];
    for (slot, raw) in fields.iter_mut().zip(args) {
        *slot = raw
            .parse()
            .with_context(|| format!("'{raw}' is not a number"))?;
    }
    let candle = Candle::new(fields[0], fields[1], fields[2], fields[3]);
    let label = classify(&candle)?;

    println!("{label}");
    tracing::info!(
        body = candle.body(),
        upper_wick = candle.upper_wick(),
        lower_wick = candle.lower_wick(),
        %label,
        "Classified candle"
    );
    Ok(())
}

fn run_summarize(config: &Config, args: &[String]) -> Result<()> {
    let mut path: Option<&str> = None;
    let mut by_strategy = false;
    let mut json = false;
    for arg in args {
        match arg.as_str() {
            "--by-strategy" => by_strategy = true,
            "--json" => json = true,
            other if !other.starts_with("--") && path.is_none() => path = Some(other),
            other => bail!("unknown summarize argument '{other}'"),
        }
    }
    let path = path.unwrap_or(&config.journal.default_path);

    let trades = journal::load_trades(path)
        .with_context(|| format!("failed to load trade journal from {path}"))?;
    let summary = journal::summarize(&trades);
    let groups = by_strategy.then(|| journal::summarize_by_strategy(&trades));

    if json {
        let report = serde_json::json!({
            "summary": summary,
            "strategies": groups,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{summary}");
    if let Some(groups) = groups {
        if groups.is_empty() {
            println!("(no strategy labels in journal)");
        }
        for group in groups {
            println!(
                "  {}: trades={}, total={:.2}, mean={:.2}",
                group.strategy, group.trade_count, group.total_pnl, group.mean_pnl
            );
        }
    }
    Ok(())
}

fn run_cards() -> Result<()> {
    let catalog = PatternCatalog::standard();
    for (i, card) in catalog.cards().iter().enumerate() {
        println!("{}. {} - {}", i + 1, card.term, card.definition);
    }
    Ok(())
}

fn run_quiz(config: &Config, args: &[String]) -> Result<()> {
    let mut questions = config.quiz.questions_per_round;
    let mut seed = config.quiz.seed;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--questions" => {
                let raw = iter.next().context("--questions needs a value")?;
                questions = raw
                    .parse()
                    .with_context(|| format!("'{raw}' is not a question count"))?;
            }
            "--seed" => {
                let raw = iter.next().context("--seed needs a value")?;
                seed = Some(
                    raw.parse()
                        .with_context(|| format!("'{raw}' is not a seed"))?,
                );
            }
            other => bail!("unknown quiz argument '{other}'"),
        }
    }
    if questions == 0 {
        bail!("question count must be > 0");
    }

    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::debug!(seed, questions, "Starting quiz session");

    let mut session = QuizSession::new(PatternCatalog::standard(), seed);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut asked = 0u32;

    println!("Classify the final candle: [d]oji, b[u]llish, [b]earish, [s]kip, [q]uit");
    while asked < questions {
        let question = session.draw();
        let candle = question.candle;
        println!(
            "\nQ{}: open={:.2} high={:.2} low={:.2} close={:.2}",
            asked + 1,
            candle.open,
            candle.high,
            candle.low,
            candle.close
        );
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match parse_quiz_command(&line?) {
            Some(QuizCommand::Guess(guess)) => {
                let report = session.answer(guess)?;
                asked += 1;
                match report.outcome {
                    GuessOutcome::Correct => {
                        println!("Correct! (streak {})", session.score.streak)
                    }
                    GuessOutcome::Incorrect => {
                        println!("Wrong, that was {}.", report.correct_label)
                    }
                }
            }
            Some(QuizCommand::Skip) => {
                let truth = classify(&candle)?;
                println!("Skipped, it was {truth}.");
            }
            Some(QuizCommand::Score) => print_score(&session),
            Some(QuizCommand::Quit) => break,
            None => println!("Answer with doji/bullish/bearish (or d/u/b)."),
        }
    }

    print_score(&session);
    Ok(())
}

fn print_score(session: &QuizSession) {
    let score = session.score;
    let accuracy = score
        .accuracy()
        .map(|a| format!("{:.0}%", a * 100.0))
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        "Score: {}/{} correct, streak {}, accuracy {}",
        score.correct_answers, score.total_attempts, score.streak, accuracy
    );
}
