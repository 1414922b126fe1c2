use crate::core::{Segment, Time, Timeline};

/// Walk a finished timeline in order, handing each segment and its offset
/// from the timeline origin to `visit`. Presentation layers drive their own
/// pacing off the offsets; nothing here feeds back into the engine.
pub fn replay<F>(timeline: &Timeline, mut visit: F)
where
    F: FnMut(Time, &Segment),
{
    let Some(origin) = timeline.segments().first().map(Segment::start) else {
        return;
    };

    for segment in timeline.segments() {
        visit(segment.start() - origin, segment);
    }
}
