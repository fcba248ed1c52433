use retort::{Session, TrainOptions};

fn main() {
    let dir = tempfile::tempdir().expect("temp dir");
    let corpus = dir.path().join("greetings.txt");
    std::fs::write(
        &corpus,
        "hello : hi\n\
         hey there : hi\n\
         good morning : good morning to you\n\
         bye : goodbye\n\
         see you later : goodbye\n",
    )
    .expect("write corpus");

    let mut session = Session::with_seed(42);
    let report = session
        .learn(&corpus, &TrainOptions::default())
        .expect("training failed");
    println!(
        "Trained for {} epochs: mean loss {:.4} -> {:.4}",
        report.epochs, report.initial_loss, report.final_loss
    );

    for question in ["hello", "good morning", "see you later", "hey"] {
        let answer = session.ask(question, 1.0).expect("ask failed");
        println!("{question:>16} -> {answer}");
    }

    // Higher temperature flattens the distribution, so answers vary more.
    println!("\nAt temperature 3.0:");
    for _ in 0..5 {
        println!("{:>16} -> {}", "hello", session.ask("hello", 3.0).expect("ask failed"));
    }
}
