use {
    huffman_steps::{bit_string, process, Report, Result},
    std::{
        env, fs,
        io::{self, prelude::*},
        process,
    },
};

fn main() -> Result<()> {
    let mut args = env::args();

    // Usage
    if args.len() != 3 {
        print_usage();
    }

    let _exe_name = args.next();
    let (command, path) = match (args.next(), args.next()) {
        (Some(command), Some(path)) => (command, path),
        _ => print_usage(),
    };

    let text = read_text(&path)?;
    let report = process(&text);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &*command {
        "frequencies" => write!(out, "{}", report.frequencies)?,
        "steps" => {
            for step in &report.build.steps {
                writeln!(out, "{}", step.display(&report.build.tree))?;
            }
            write!(out, "{}", report.build.tree)?;
        }
        "codes" => write!(out, "{}", report.codes.display(&report.frequencies))?,
        "stats" => match &report.statistics {
            Some(statistics) => write!(out, "{}", statistics)?,
            None => writeln!(out, "No statistics for an empty text")?,
        },
        "encode" => writeln!(out, "{}", bit_string(&report.codes.encode(&text)?))?,
        "replay" if path != "-" => replay(&report, &mut out)?,
        _ => print_usage(),
    }
    Ok(())
}

fn print_usage() -> ! {
    println!("Usage:");
    println!("  huffman-steps frequencies <path>    Print the symbol frequency table");
    println!("  huffman-steps steps <path>          Print every construction step and the tree");
    println!("  huffman-steps codes <path>          Print the code of every symbol");
    println!("  huffman-steps stats <path>          Print compression statistics");
    println!("  huffman-steps encode <path>         Print the text encoded as bits");
    println!("  huffman-steps replay <path>         Step through the build (n/p/q on stdin)");
    println!("Use - as <path> to read stdin (not available for replay).");
    process::exit(1)
}

fn read_text(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn replay(report: &Report, out: &mut impl Write) -> Result<()> {
    let (tree, steps) = (&report.build.tree, &report.build.steps);
    if steps.is_empty() {
        writeln!(out, "Nothing to replay for an empty text")?;
        return Ok(());
    }

    let mut cursor = steps.cursor();
    let stdin = io::stdin();
    loop {
        if let Some(step) = cursor.current(steps) {
            writeln!(out, "{}", cursor.position())?;
            writeln!(out, "{}", step.display(tree))?;
        }
        write!(out, "[n]ext, [p]revious, [q]uit> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match line.trim() {
            "n" | "" => {
                cursor.forward();
            }
            "p" => {
                cursor.back();
            }
            "q" => return Ok(()),
            other => writeln!(out, "Unknown command {:?}", other)?,
        }
    }
}
