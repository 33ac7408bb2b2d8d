use std::io::{self, Write};

use fib_bench::fibonacci;

fn main() -> io::Result<()> {
    // Bare decimal, no trailing newline.
    let mut stdout = io::stdout();
    write!(stdout, "{}", fibonacci(35))?;
    stdout.flush()
}
