use std::collections::HashMap;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        // stopping an idle timer is a no-op
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }
}

#[derive(Debug, Default)]
struct TimersMap(HashMap<&'static str, InnerTimer>);

impl Deref for TimersMap {
    type Target = HashMap<&'static str, InnerTimer>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for TimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Named, accumulating wall-clock timers.
///
/// One `Timers` is created per adapter invocation.  Each phase of the
/// invocation (`"solve"`, `"revert"`, `"validate"`) is timed under its own
/// key via the [`timeit!`](crate::timers::timeit) macro.
#[derive(Default, Debug)]
pub struct Timers {
    timers: TimersMap,
}

impl Timers {
    pub fn start(&mut self, key: &'static str) {
        self.timers.entry(key).or_default().start();
    }

    pub fn stop(&mut self, key: &'static str) {
        if let Some(t) = self.timers.get_mut(key) {
            t.stop();
        }
    }

    /// accumulated time for `key`, zero if it was never started
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.timers.get(key).map_or(Duration::ZERO, |t| t.elapsed)
    }

    pub fn total_time(&self) -> Duration {
        self.timers
            .values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    pub fn print(&self, out: &mut impl Write) -> std::io::Result<()> {
        let mut keys: Vec<_> = self.timers.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(out, "{:} : {:?}", key, self.elapsed(key))?;
        }
        writeln!(out, "total : {:?}", self.total_time())
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start($key);
        $(
            $tt
        )+
        $timer.stop($key);
    }
}
pub(crate) use timeit;

#[test]
fn test_timers() {
    let mut timers = Timers::default();
    assert_eq!(timers.elapsed("solve"), Duration::ZERO);

    timeit! {timers => "solve";
        std::thread::sleep(Duration::from_millis(2));
    }
    timeit! {timers => "validate";
        std::thread::sleep(Duration::from_millis(1));
    }
    assert!(timers.elapsed("solve") >= Duration::from_millis(2));
    assert_eq!(
        timers.total_time(),
        timers.elapsed("solve") + timers.elapsed("validate")
    );

    let mut buf = Vec::new();
    timers.print(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("solve : "));
    assert!(text.lines().last().unwrap().starts_with("total : "));
}
