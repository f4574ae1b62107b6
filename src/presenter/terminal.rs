use std::io::Write;

use chrono::Local;
use log::warn;

use crate::models::Category;

use super::Render;
use super::view::ResultsView;

const BAR_WIDTH: usize = 40;

/// Draws the split bar as plain text, one block per refresh.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &ResultsView) -> std::io::Result<()> {
        writeln!(self.out, "[{}]", Local::now().format("%H:%M:%S"))?;
        writeln!(self.out, "{}", split_bar(view))?;

        for panel in view.panels() {
            if !panel.visible {
                continue;
            }
            writeln!(
                self.out,
                "  {:<5} {:>7} {}",
                label(panel.category),
                panel.percentage_text,
                panel.count_text
            )?;
        }

        writeln!(self.out, "  {}", view.total_text)?;
        if let Some(message) = &view.message {
            writeln!(self.out, "  ! {}", message)?;
        }
        self.out.flush()
    }
}

impl<W: Write + Send> Render for TerminalRenderer<W> {
    fn render(&mut self, view: &ResultsView) {
        if let Err(e) = self.write_view(view) {
            warn!("Failed to draw results: {}", e);
        }
    }
}

fn label(category: Category) -> &'static str {
    match category {
        Category::Cats => "Cats",
        Category::Dogs => "Dogs",
    }
}

// Cats fill from the left, dogs from the right
fn split_bar(view: &ResultsView) -> String {
    let cells = |width: f64, visible: bool| {
        if !visible {
            return 0;
        }
        ((width.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize
    };

    let cats = cells(view.cats.width, view.cats.visible).min(BAR_WIDTH);
    let dogs = if view.dogs.visible { BAR_WIDTH - cats } else { 0 };
    let gap = BAR_WIDTH - cats - dogs;

    format!("|{}{}{}|", "#".repeat(cats), " ".repeat(gap), "=".repeat(dogs))
}
