use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::notifier::LoggingReservationNotifier;
use adapter::repository::field::FieldRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::schedule::ScheduleRepositoryImpl;
use kernel::repository::field::FieldRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::schedule::ScheduleRepository;
use kernel::service::availability::AvailabilityService;
use kernel::service::reservation::ReservationService;
use shared::config::{AppConfig, BookingConfig};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    field_repository: Arc<dyn FieldRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    availability_service: Arc<AvailabilityService>,
    reservation_service: Arc<ReservationService>,
    booking_config: BookingConfig,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let field_repository: Arc<dyn FieldRepository> =
            Arc::new(FieldRepositoryImpl::new(pool.clone()));
        let schedule_repository: Arc<dyn ScheduleRepository> =
            Arc::new(ScheduleRepositoryImpl::new(pool.clone()));
        let reservation_repository: Arc<dyn ReservationRepository> =
            Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let notifier = Arc::new(LoggingReservationNotifier::new());

        let availability_service = Arc::new(AvailabilityService::new(
            field_repository.clone(),
            schedule_repository.clone(),
            reservation_repository.clone(),
            app_config.booking.clone(),
        ));
        let reservation_service = Arc::new(ReservationService::new(
            field_repository.clone(),
            schedule_repository.clone(),
            reservation_repository,
            notifier,
            app_config.booking.clone(),
        ));

        Self {
            health_check_repository,
            field_repository,
            schedule_repository,
            availability_service,
            reservation_service,
            booking_config: app_config.booking,
        }
    }

    pub fn booking_config(&self) -> &BookingConfig {
        &self.booking_config
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn field_repository(&self) -> Arc<dyn FieldRepository> {
        self.field_repository.clone()
    }

    pub fn schedule_repository(&self) -> Arc<dyn ScheduleRepository> {
        self.schedule_repository.clone()
    }

    pub fn availability_service(&self) -> Arc<AvailabilityService> {
        self.availability_service.clone()
    }

    pub fn reservation_service(&self) -> Arc<ReservationService> {
        self.reservation_service.clone()
    }
}
