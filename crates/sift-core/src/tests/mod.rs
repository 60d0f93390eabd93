//! Unit tests for `sift_core` types.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{BoxedEvaluator, Evaluator};



/// An evaluator with a fixed answer that counts how often it is asked.
struct Recording {
    label: &'static str,
    result: bool,
    calls: Arc<AtomicUsize>,
}

impl Recording {
    fn new(label: &'static str, result: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let recording = Self {
            label,
            result,
            calls: Arc::clone(&calls),
        };
        (recording, calls)
    }
}

impl<N> Evaluator<N> for Recording {
    fn matches(&self, _root: &N, _candidate: &N) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
    }
}

impl fmt::Display for Recording {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Builds one recording evaluator per answer, labelled `e0`, `e1`, ...
fn recordings<N>(answers: &[bool]) -> (Vec<BoxedEvaluator<N>>, Vec<Arc<AtomicUsize>>) {
    const LABELS: [&str; 6] = ["e0", "e1", "e2", "e3", "e4", "e5"];
    answers
        .iter()
        .zip(LABELS)
        .map(|(&answer, label)| {
            let (recording, calls) = Recording::new(label, answer);
            (Box::new(recording) as BoxedEvaluator<N>, calls)
        })
        .unzip()
}

fn call_counts(calls: &[Arc<AtomicUsize>]) -> Vec<usize> {
    calls
        .iter()
        .map(|counter| counter.load(Ordering::SeqCst))
        .collect()
}

fn boxed<N, E: Evaluator<N> + 'static>(evaluator: E) -> BoxedEvaluator<N> {
    Box::new(evaluator)
}
