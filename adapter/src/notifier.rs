use kernel::model::reservation::Reservation;
use kernel::notifier::ReservationNotifier;

/// Notification adapter. Actual delivery (mail, push) lives with the
/// messaging collaborator; this side only emits the event into the log
/// stream and never blocks the admission path.
#[derive(Default)]
pub struct LoggingReservationNotifier;

impl LoggingReservationNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl ReservationNotifier for LoggingReservationNotifier {
    fn reservation_created(&self, reservation: &Reservation) {
        tracing::info!(
            reservation_id = %reservation.id,
            field_id = %reservation.field_id,
            reference_code = %reservation.reference_code,
            date = %reservation.date,
            "reservation created"
        );
    }

    fn reservation_status_changed(&self, reservation: &Reservation) {
        tracing::info!(
            reservation_id = %reservation.id,
            field_id = %reservation.field_id,
            status = reservation.status.as_str(),
            "reservation status changed"
        );
    }
}
