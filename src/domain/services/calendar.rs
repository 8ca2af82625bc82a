use crate::domain::models::{movie::Movie, screening::Screening};
use crate::domain::services::scheduling::screening_end;
use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

/// Generates an iCalendar (.ics) string for a specific screening
pub fn generate_ics(movie: &Movie, screening: &Screening) -> String {
    let mut calendar = Calendar::new();

    let ical_event = IcalEvent::new()
        .summary(&movie.title)
        .description(movie.description.as_deref().unwrap_or(""))
        .starts(screening.starts_at)
        .ends(screening_end(screening.starts_at, screening.duration_min))
        .uid(&screening.id)
        .done();

    calendar.push(ical_event);
    calendar.to_string()
}
