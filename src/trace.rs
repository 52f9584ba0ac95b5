//! Renders one trace frame per machine configuration.
//!
//! A frame is three text lines plus a blank separator: the state name, the
//! materialized tape window, and a pointer line with `|` under logical cell 0
//! and `^` under the head cell. Display columns are computed from
//! `head + offset`, so the caret stays on the correct character column no
//! matter how far the window has grown leftward.

/// Renders the configuration as a four-line frame (trailing blank line
/// included). Pure; the caller decides where the frame goes.
///
/// `window` is the materialized tape, leftmost cell first; `offset` is the
/// number of cells materialized left of logical cell 0. The head may sit one
/// cell left of the window (it steps before the next write grows the window),
/// in which case the tape line is left-padded with spaces.
pub fn render_frame(state: &str, head: isize, window: &str, offset: usize) -> String {
    let column = head + offset as isize;
    let padding = if column < 0 { (-column) as usize } else { 0 };

    let tape_line = format!("{}{}", " ".repeat(padding), window);

    let marker = offset + padding;
    let caret = (column + padding as isize) as usize;

    // The caret coincides with the zero marker exactly when the head is at
    // logical cell 0; only the marker is printed then.
    let pointer = if head == 0 {
        format!("{}|", " ".repeat(marker))
    } else if caret > marker {
        format!("{}|{}^", " ".repeat(marker), " ".repeat(caret - marker - 1))
    } else {
        format!("{}^{}|", " ".repeat(caret), " ".repeat(marker - caret - 1))
    };

    format!("{state}\n{tape_line}\n{pointer}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_frame() {
        assert_eq!(render_frame("A", 0, "1", 0), "A\n1\n|\n\n");
    }

    #[test]
    fn test_head_right_of_zero() {
        assert_eq!(render_frame("B", 1, "0", 0), "B\n0\n|^\n\n");
        assert_eq!(render_frame("B", 3, "0110", 0), "B\n0110\n|  ^\n\n");
    }

    #[test]
    fn test_head_one_left_of_window() {
        // Head stepped left off a window that starts at logical 0.
        assert_eq!(render_frame("A", -1, "x", 0), "A\n x\n^|\n\n");
    }

    #[test]
    fn test_caret_alignment_after_left_growth() {
        // Two cells materialized left of zero; head on the leftmost one.
        assert_eq!(render_frame("A", -2, "yx1", 2), "A\nyx1\n^ |\n\n");
        // Head back at logical 0 prints the bare marker, offset-shifted.
        assert_eq!(render_frame("A", 0, "yx1", 2), "A\nyx1\n  |\n\n");
        // Head left of the grown window pads the tape line.
        assert_eq!(render_frame("A", -3, "yx1", 2), "A\n yx1\n^  |\n\n");
    }

    #[test]
    fn test_head_right_of_zero_with_offset() {
        // Marker shifts with the offset; caret lands on head's column.
        assert_eq!(render_frame("B", 2, "xx011", 2), "B\nxx011\n  | ^\n\n");
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(render_frame("A", 0, "", 0), "A\n\n|\n\n");
    }
}
