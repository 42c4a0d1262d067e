use stationmap_query::{QueryEngine, Reply};
use std::io::{self, BufRead, Write};

/// Read commands until `EXIT` or end of input.
///
/// Blank lines are skipped; empty replies print nothing. Input is decoded
/// lossily, so bytes that are not UTF-8 end up as an invalid command.
pub fn run(
    engine: &QueryEngine<'_>,
    mut input: impl BufRead,
    mut output: impl Write,
    prompt: &str,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        if !prompt.is_empty() {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::debug!("End of input, closing session");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match engine.respond(&line) {
            Reply::Text(text) if text.is_empty() => {}
            Reply::Text(text) => writeln!(output, "{text}")?,
            Reply::Exit => break,
        }
        output.flush()?;
    }
    Ok(())
}
