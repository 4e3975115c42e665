//! Interactive Trainer Binary
//!
//! Menu-driven terminal client: play hands street by street with graded
//! feedback, run preflop drills, practice opening ranges, and review the
//! statistics saved between sessions.
//!
//! Options: --seed, --store

use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, MultiSelect, Select};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tutorpoker::advice;
use tutorpoker::advice::{Action, Advice};
use tutorpoker::cards::{Card, Hole};
use tutorpoker::play::{Cue, Mode, Pacer, Session, DRILL_PAUSE, STREET_PAUSE};
use tutorpoker::stats::{Choice, FileStore, Ledger, Record};

const DRILL_LENGTH: usize = 5;
const TICK: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed the shuffle for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Directory the stats file lives in
    #[arg(long, default_value = "stats")]
    store: std::path::PathBuf,
}

fn main() {
    let args = Args::parse();
    tutorpoker::log();
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut ledger = Ledger::new(FileStore::new(&args.store)).expect("open stats");
    let mut session = Session::new(rng);
    let mut pacer = Pacer::new();
    loop {
        pacer.cancel();
        let pick = Select::new()
            .with_prompt("\nPOKER TRAINER")
            .report(false)
            .items(&[
                "Play a hand",
                "Quick drills",
                "Range practice",
                "Statistics",
                "Hand history",
                "Reset stats",
                "Quit",
            ])
            .default(0)
            .interact()
            .unwrap();
        match pick {
            0 => play(&mut session, &mut pacer, rng, &mut ledger),
            1 => drills(&mut session, &mut pacer, rng, &mut ledger),
            2 => ranges(&session, &mut ledger),
            3 => statistics(&ledger),
            4 => history(&ledger),
            5 => reset(&mut ledger),
            _ => break,
        }
    }
}

/// One full hand: a decision on every street, then the reveal.
fn play<R: Rng>(
    session: &mut Session,
    pacer: &mut Pacer,
    rng: &mut R,
    ledger: &mut Ledger<FileStore>,
) {
    log::info!("play mode: dealing a fresh hand");
    session.deal(rng);
    while !session.is_complete() {
        let view = session.view();
        println!(
            "\n   {} | pot {} | call {} | {}",
            view.street, view.pot, view.to_call, view.seat
        );
        if !view.board.is_empty() {
            println!("   board  {}", row(&view.board));
        }
        let advice = advice::advise(&view, rng);
        let pick = ask(format!("YOU HOLD {}", holding(&view.hero)));
        let correct = advice.matches(pick);
        grade(correct, &advice);
        ledger
            .record(Record::new(Choice::from(pick), correct, view.seat, Mode::Play).on(view.street))
            .expect("save stats");
        pacer.schedule(Cue::Advance, STREET_PAUSE, session);
        pace(pacer, session, rng);
    }
    let view = session.view();
    println!("\n   showdown");
    println!("   board    {}", row(&view.board));
    println!("   you      {}", holding(&view.hero));
    println!("   villain  {}", holding(&session.villain()));
}

/// A run of preflop spot checks, one fresh hand per question.
fn drills<R: Rng>(
    session: &mut Session,
    pacer: &mut Pacer,
    rng: &mut R,
    ledger: &mut Ledger<FileStore>,
) {
    log::info!("drill mode: {} preflop questions", DRILL_LENGTH);
    let mut right = 0;
    session.deal(rng);
    for i in 1..=DRILL_LENGTH {
        let view = session.view();
        let advice = advice::advise(&view, rng);
        let pick = ask(format!(
            "[{}/{}] {} | YOU HOLD {}",
            i,
            DRILL_LENGTH,
            view.seat,
            holding(&view.hero)
        ));
        let correct = advice.matches(pick);
        if correct {
            right += 1;
        }
        grade(correct, &advice);
        ledger
            .record(Record::new(Choice::from(pick), correct, view.seat, Mode::Drills))
            .expect("save stats");
        if i < DRILL_LENGTH {
            pacer.schedule(Cue::Redeal, DRILL_PAUSE, session);
            pace(pacer, session, rng);
        }
    }
    println!("\n   {} of {} correct", right, DRILL_LENGTH);
}

/// Mark an opening range on the starting-hand grid and get it scored
/// against the chart for the seat.
fn ranges(session: &Session, ledger: &mut Ledger<FileStore>) {
    let seat = session.seat();
    log::info!("range mode: scoring an opening range in the {}", seat);
    let grid = advice::range::grid();
    for line in grid.chunks(13) {
        let line = line
            .iter()
            .map(|label| format!("{:>4}", label))
            .collect::<Vec<String>>()
            .join(" ");
        println!("   {}", line);
    }
    let picks = MultiSelect::new()
        .with_prompt(format!("\nSelect your opening range in the {}", seat))
        .report(false)
        .items(&grid)
        .interact()
        .unwrap();
    let selection = picks
        .iter()
        .map(|i| grid[*i].as_str())
        .collect::<Vec<&str>>();
    let graded = advice::range::score(&selection, seat);
    match graded.passing() {
        true => println!(
            "   {}  {:.0}% of the {} opening range",
            "PASS".green(),
            graded.score,
            seat
        ),
        false => println!(
            "   {}  {:.0}% of the {} opening range",
            "MISS".red(),
            graded.score,
            seat
        ),
    }
    ledger
        .record(Record::new(Choice::Range, graded.passing(), seat, Mode::Range).scored(graded.score))
        .expect("save stats");
}

fn statistics(ledger: &Ledger<FileStore>) {
    let sheet = ledger.sheet();
    println!(
        "\n   {} decisions | {:.1}% accurate | streak {} (best {})",
        sheet.total_decisions,
        sheet.accuracy(),
        sheet.current_streak,
        sheet.max_streak
    );
    for (seat, tally) in &sheet.position_stats {
        println!(
            "   {:>4}  {:>4} decisions  {:>5.1}%",
            seat.to_string(),
            tally.total,
            tally.accuracy()
        );
    }
    for (mode, tally) in &sheet.mode_stats {
        println!(
            "   {:>6}  {:>4} decisions  {:>5.1}%",
            mode.to_string(),
            tally.total,
            tally.accuracy()
        );
    }
    for (street, tally) in &sheet.street_stats {
        println!(
            "   {:>7}  {:>4} decisions  {:>5.1}%",
            street.to_string(),
            tally.total,
            tally.accuracy()
        );
    }
}

fn history(ledger: &Ledger<FileStore>) {
    let records = ledger.history(20);
    if records.is_empty() {
        println!("\n   no decisions on record");
        return;
    }
    println!();
    for record in records {
        let mark = match record.is_correct {
            true => "+".green(),
            false => "-".red(),
        };
        let context = match record.street {
            Some(street) => street.to_string(),
            None => record.mode.to_string(),
        };
        println!(
            "   {} {:>5} from {:>4} ({})",
            mark,
            record.decision.to_string(),
            record.position.to_string(),
            context
        );
    }
}

fn reset(ledger: &mut Ledger<FileStore>) {
    let sure = Confirm::new()
        .with_prompt("Erase all saved statistics?")
        .default(false)
        .interact()
        .unwrap();
    if sure {
        ledger.reset().expect("reset stats");
        println!("   statistics cleared");
    }
}

/// Block until the pending cue fires, then act on it.
fn pace<R: Rng>(pacer: &mut Pacer, session: &mut Session, rng: &mut R) {
    while !pacer.idle() {
        std::thread::sleep(TICK);
        match pacer.poll(session) {
            Some(Cue::Advance) => {
                session.advance();
            }
            Some(Cue::Redeal) => session.deal(rng),
            None => {}
        }
    }
}

fn ask(prompt: String) -> Action {
    let choices = Action::all()
        .iter()
        .map(|action| action.to_string())
        .collect::<Vec<String>>();
    let selection = Select::new()
        .with_prompt(prompt)
        .report(false)
        .items(choices.as_slice())
        .default(0)
        .interact()
        .unwrap();
    Action::all()[selection]
}

fn grade(correct: bool, advice: &Advice) {
    match correct {
        true => println!("   {}", "CORRECT".green()),
        false => println!("   {}  advice was {}", "WRONG".red(), badge(advice.action)),
    }
    println!("   {}", advice.explanation);
    println!("   {}", advice.pot_odds);
    println!("   win probability {:.0}%", advice.win_probability * 100.0);
}

fn badge(action: Action) -> colored::ColoredString {
    match action {
        Action::Fold => "FOLD".red(),
        Action::Call => "CALL".yellow(),
        Action::Raise => "RAISE".green(),
    }
}

fn row(cards: &[Card]) -> String {
    cards.iter().map(paint).collect::<Vec<String>>().join(" ")
}

fn holding(hole: &Hole) -> String {
    let [a, b] = hole.cards();
    format!("{} {}", paint(&a), paint(&b))
}

fn paint(card: &Card) -> String {
    match card.suit().is_red() {
        true => card.to_string().red().to_string(),
        false => card.to_string(),
    }
}
