use std::ops::ControlFlow;

use widthscan_core::{Objective, Observer, Real};

use super::{Action, Error, Event, Point, SearchSpec, Solution, Status};

/// Outcome of one scan, before rounding.
pub(super) struct Scan<T> {
    status: Status,
    best: Point<T>,
}

impl<T: Real> Scan<T> {
    pub(super) fn into_solution(self, spec: &SearchSpec<T>) -> Solution<T> {
        Solution::new(self.status, self.best, spec)
    }
}

/// Evaluates samples one at a time, keeping a running minimum.
pub(super) fn sequential<T, O, Obs>(
    objective: &O,
    spec: &SearchSpec<T>,
    observer: &mut Obs,
) -> Result<Scan<T>, Error>
where
    T: Real,
    O: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    let left = spec.left();
    let seed = Point::new(0, left.clone(), evaluate(objective, left)?);

    let mut tracker = Tracker::new(seed, spec.len(), observer);
    if tracker.announce(None).is_break() {
        return Ok(tracker.finish(Status::StoppedByObserver));
    }

    for index in 1..spec.len() {
        let x = spec.sample(index);
        let objective_value = evaluate(objective, x.clone())?;
        let point = Point::new(index, x, objective_value);
        if tracker.offer(point).is_break() {
            return Ok(tracker.finish(Status::StoppedByObserver));
        }
    }

    Ok(tracker.finish(Status::Completed))
}

/// Evaluates all samples in one call, then reduces to the first minimum.
pub(super) fn batch<T, O, Obs>(
    objective: &O,
    spec: &SearchSpec<T>,
    observer: &mut Obs,
) -> Result<Scan<T>, Error>
where
    T: Real,
    O: Objective<T>,
    Obs: Observer<Event<T>, Action>,
{
    let xs: Vec<T> = spec.samples().collect();
    let values = objective
        .values(&xs)
        .map_err(|error| Error::Objective(Box::new(error)))?;

    if values.len() != xs.len() {
        return Err(Error::BatchLength {
            expected: xs.len(),
            actual: values.len(),
        });
    }

    let mut points = xs
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(index, (x, value))| Point::new(index, x, value));

    let Some(seed) = points.next() else {
        return Err(Error::BatchLength {
            expected: spec.len(),
            actual: 0,
        });
    };

    let mut tracker = Tracker::new(seed, spec.len(), observer);
    if tracker.announce(None).is_break() {
        return Ok(tracker.finish(Status::StoppedByObserver));
    }

    for point in points {
        if tracker.offer(point).is_break() {
            return Ok(tracker.finish(Status::StoppedByObserver));
        }
    }

    Ok(tracker.finish(Status::Completed))
}

fn evaluate<T, O: Objective<T>>(objective: &O, x: T) -> Result<T, Error> {
    objective
        .value(x)
        .map_err(|error| Error::Objective(Box::new(error)))
}

/// Returns true if `candidate` should replace `best` as the minimum.
///
/// Strictly smaller wins, so ties keep the earlier sample. NaN never wins,
/// but any non-NaN value replaces a NaN.
pub(super) fn is_better<T: Real>(candidate: &T, best: &T) -> bool {
    candidate < best || (best.is_nan() && !candidate.is_nan())
}

/// Running minimum shared by both strategies, so they report identically.
struct Tracker<'obs, T, Obs> {
    best: Point<T>,
    samples: usize,
    observer: &'obs mut Obs,
}

impl<'obs, T, Obs> Tracker<'obs, T, Obs>
where
    T: Real,
    Obs: Observer<Event<T>, Action>,
{
    fn new(seed: Point<T>, samples: usize, observer: &'obs mut Obs) -> Self {
        Self {
            best: seed,
            samples,
            observer,
        }
    }

    /// Replaces the minimum if `point` is better and notifies the observer.
    fn offer(&mut self, point: Point<T>) -> ControlFlow<()> {
        if !is_better(&point.objective, &self.best.objective) {
            return ControlFlow::Continue(());
        }

        let previous = std::mem::replace(&mut self.best, point);
        self.announce(Some(previous))
    }

    /// Emits an event for the current minimum.
    fn announce(&mut self, previous: Option<Point<T>>) -> ControlFlow<()> {
        let event = Event {
            point: self.best.clone(),
            previous,
            samples: self.samples,
        };

        match self.observer.observe(&event) {
            Some(Action::StopEarly) => ControlFlow::Break(()),
            None => ControlFlow::Continue(()),
        }
    }

    fn finish(self, status: Status) -> Scan<T> {
        Scan {
            status,
            best: self.best,
        }
    }
}
