use colored::Colorize;

use crate::board::Board;

/// Box-drawing rendering with the blank as a highlighted placeholder glyph,
/// the variant behind the solver's `--pretty` flag. The plain `Display` impl
/// on `Board` prints the blank as `0`.
pub trait DebugPrintable {
    fn debug_print(&self);
}

impl DebugPrintable for Board {
    fn debug_print(&self) {
        let side = self.side();
        let width = (side * side - 1).to_string().len();
        let bar = "─".repeat(width + 2);

        let rule = |left: &str, mid: &str, right: &str| {
            let mut line = String::from(left);
            for col in 0..side {
                line.push_str(&bar);
                line.push_str(if col < side - 1 { mid } else { right });
            }
            println!("{}", line);
        };

        rule("┌", "┬", "┐");
        for row in 0..side {
            print!("│");
            for col in 0..side {
                let tile = self.at(row, col);
                if tile == 0 {
                    // pad before colorizing so the escape codes stay out of
                    // the width calculation
                    let glyph = format!("{:>width$}", "·");
                    print!(" {} ", glyph.green());
                } else {
                    print!(" {:>width$} ", tile);
                }
                print!("│");
            }
            println!();

            if row < side - 1 {
                rule("├", "┼", "┤");
            }
        }
        rule("└", "┴", "┘");
    }
}
