use crate::query::Query;
use abv_search::Trace;
use abv_search::bound;
use abv_search::minimax;
use abv_stepper::Status;
use abv_stepper::Stepper;
use abv_tree::Tree;
use std::io::BufRead;
use std::io::Write;

/// Interactive session over one tree and its trace.
pub struct Explorer {
    tree: Tree,
    stepper: Stepper,
}

impl From<Tree> for Explorer {
    fn from(tree: Tree) -> Self {
        let trace = Trace::from(&tree);
        log::debug!("explorer trace has {} steps", trace.len());
        Self {
            stepper: Stepper::from(trace),
            tree,
        }
    }
}

impl Explorer {
    pub fn run(mut self) -> anyhow::Result<()> {
        println!("{}", self.tree);
        println!("{} steps; enter to advance, `help` for commands", self.stepper.len());
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("{} > ", self.cursor());
            std::io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            match Query::read(&line?) {
                Ok(Query::Quit) => break,
                Ok(query) => println!("{}", self.handle(query)),
                Err(e) => eprintln!("{}", e),
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, query: Query) -> String {
        match query {
            Query::Next => self.stepper.forward().to_string(),
            Query::Prev => self.stepper.backward().to_string(),
            Query::Jump { position } => match self.stepper.jump(position) {
                Ok(Some(step)) => step.to_string(),
                Ok(None) => String::from("(not started)"),
                Err(e) => e.to_string(),
            },
            Query::Reset => self.stepper.reset().to_string(),
            Query::Show => self.show(),
            Query::Trace => self.trace(),
            Query::Tree => self.tree.to_string(),
            Query::Summary => self.summary(),
            Query::Quit => String::new(),
        }
    }

    fn cursor(&self) -> String {
        format!("[{}/{}]", self.stepper.position(), self.stepper.len())
    }

    fn show(&self) -> String {
        let snapshot = self.stepper.snapshot(&self.tree);
        snapshot
            .nodes
            .iter()
            .map(|view| {
                let depth = self.tree.get(view.id).map(|n| n.depth()).unwrap_or(0);
                let focus = match snapshot.focus == Some(view.id) {
                    true => "*",
                    false => " ",
                };
                let mut line = format!(
                    "{}{}{} {} {}",
                    focus,
                    "  ".repeat(depth),
                    view.kind.symbol(),
                    view.id,
                    Self::status(view.status),
                );
                if let Some(window) = view.window {
                    line += &format!(" α={} β={}", bound::show(window.alpha), bound::show(window.beta));
                }
                if let Some(value) = view.value {
                    line += &format!(" value={}", value);
                } else if let Some(best) = view.best {
                    line += &format!(" best={}", best);
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn status(status: Status) -> &'static str {
        match status {
            Status::Unvisited => "·",
            Status::Active => "…",
            Status::Done => "✓",
            Status::Pruned => "✂",
        }
    }

    fn trace(&self) -> String {
        self.stepper
            .trace()
            .steps()
            .iter()
            .map(|step| match step.index + 1 == self.stepper.position() {
                true => format!("> {}", step),
                false => format!("  {}", step),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn summary(&self) -> String {
        let trace = self.stepper.trace();
        let summary = trace.summary(&self.tree);
        let check = minimax(&self.tree);
        match check == trace.value() {
            true => format!("{}\nminimax    {} (agrees)", summary, check),
            false => format!("{}\nminimax    {} (DISAGREES)", summary, check),
        }
    }
}
