//! Operations as composable pipeline steps.
//!
//! Every function in this module captures its parameters and returns a
//! *step*: a closure `Fn(&[T]) -> Result<U>`. Steps never panic on an edge
//! input. Operations that need a non-empty sequence (`reduce`, `sum`,
//! `product`, `min`, `max`, `pop`, `shift`, `sort`, `sort_by`) return
//! [`SeqError::Empty`](crate::SeqError::Empty) instead, and
//! [`fill`] reports a bad range with
//! [`SeqError::RangeOutOfBounds`](crate::SeqError::RangeOutOfBounds). All
//! other steps always succeed.
//!
//! Steps are independently generic: each one may change the element type,
//! and there is no pipeline object fixing a type for the whole chain.
//! Composing is up to the caller, either by hand with `?`, with [`then`], or
//! with the [`try_pipe!`](crate::try_pipe) macro. Both helpers stop at the
//! first failing step.
//!
//! # Examples
//!
//! ```
//! use seqops::{pipe, try_pipe};
//!
//! let evens = pipe::filter(|&x: &i32| x % 2 == 0);
//! let squares = pipe::map(|&x: &i32| x * x);
//! let total = pipe::sum::<i32>();
//!
//! assert_eq!(try_pipe!(vec![1, 2, 3, 4], evens, squares, total), Ok(20));
//!
//! // Nothing survives the filter, so `sum` reports the empty input.
//! let evens = pipe::filter(|&x: &i32| x % 2 == 0);
//! let total = pipe::sum::<i32>();
//! assert!(try_pipe!(vec![1, 3], evens, total).is_err());
//! ```

/// Logs a failed step when the `tracing` feature is on.
macro_rules! trace_failure {
    ($op:expr, $result:expr) => {{
        let result = $result;
        #[cfg(feature = "tracing")]
        if let Err(error) = &result {
            tracing::debug!(op = $op, %error, "pipeline step failed");
        }
        result
    }};
}

mod adapters;
mod compose;

pub use adapters::*;
pub use compose::*;

#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use std::{
        fmt::Debug,
        sync::{Arc, Mutex},
    };

    use tracing::{
        Event, Subscriber,
        field::{Field, Visit},
    };
    use tracing_subscriber::{
        Registry,
        layer::{Context, Layer, SubscriberExt},
    };

    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Fields {
        op: String,
        error: String,
    }

    impl Visit for Fields {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "op" {
                self.op = value.to_owned();
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            if field.name() == "error" {
                self.error = format!("{value:?}");
            }
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<Fields>>>);

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            self.0.lock().unwrap().push(fields);
        }
    }

    fn capture(run: impl FnOnce()) -> Vec<Fields> {
        let captured = Captured::default();
        let subscriber = Registry::default().with(captured.clone());
        tracing::subscriber::with_default(subscriber, run);
        std::mem::take(&mut *captured.0.lock().unwrap())
    }

    #[test]
    fn failed_step_emits_one_event() {
        let events = capture(|| {
            let ascending = sort(|a: &i32, b: &i32| a < b);
            assert!(ascending(&[]).is_err());
        });

        assert_eq!(
            events,
            [Fields {
                op: "sort".to_string(),
                error: "cannot sort an empty sequence".to_string(),
            }]
        );
    }

    #[test]
    fn successful_steps_are_silent() {
        let events = capture(|| {
            assert_eq!(sort(|a: &i32, b: &i32| a < b)(&[2, 1]), Ok(vec![1, 2]));
            assert_eq!(sum::<u8>()(&[200, 100]), Ok(44));
            assert_eq!(reduce_or_default(|a: i32, b| a + b)(&[]), Ok(0));
        });

        assert!(events.is_empty());
    }

    #[test]
    fn short_circuit_logs_only_the_failing_step() {
        let events = capture(|| {
            let result = crate::try_pipe!(
                vec![1, 3],
                filter(|&x: &i32| x % 2 == 0),
                pop::<i32>(),
            );
            assert!(result.is_err());
        });

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].op, "pop");
    }
}
