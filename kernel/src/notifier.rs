use crate::model::reservation::Reservation;

/// Notification collaborator, told after a reservation is created or
/// changes status. Fire-and-forget: implementations must not block the
/// admission path, and delivery failures stay on their side.
pub trait ReservationNotifier: Send + Sync {
    fn reservation_created(&self, reservation: &Reservation);
    fn reservation_status_changed(&self, reservation: &Reservation);
}
