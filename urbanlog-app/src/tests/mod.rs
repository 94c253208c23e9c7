pub mod prelude {
    use std::cell::RefCell;

    pub use urbanlog_core::{
        db::*,
        entities::*,
        gateways::{
            email::EmailGateway,
            geoloc::{GeolocationError, GeolocationGateway},
        },
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    /// Captures outgoing mail instead of sending it.
    #[derive(Default)]
    pub struct MailBox {
        pub mails: RefCell<Vec<(Vec<EmailAddress>, EmailContent)>>,
    }

    impl EmailGateway for MailBox {
        fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
            self.mails
                .borrow_mut()
                .push((recipients.to_vec(), email.clone()));
        }
    }

    pub struct FixedPosition(pub MapPoint);

    impl GeolocationGateway for FixedPosition {
        fn current_position(&self) -> Result<MapPoint, GeolocationError> {
            Ok(self.0)
        }
    }

    pub struct DeniedPosition;

    impl GeolocationGateway for DeniedPosition {
        fn current_position(&self) -> Result<MapPoint, GeolocationError> {
            Err(GeolocationError::PermissionDenied)
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub outbox: MailBox,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            urbanlog_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                outbox: MailBox::default(),
            }
        }

        /// Full passwordless round trip: request a link, redeem it.
        pub fn sign_in(&self, email: &str) -> Session {
            let email_nonce =
                flows::request_login_link(&self.db_connections, &self.outbox, email).unwrap();
            flows::login_with_token(&self.db_connections, &email_nonce.encode_to_string()).unwrap()
        }

        pub fn create_request(&self, session: &Session, lat: f64, lng: f64) -> Request {
            flows::create_request(
                &self.db_connections,
                usecases::NewRequest {
                    created_by: session.user_id.clone(),
                    pos: MapPoint::from_lat_lng_deg(lat, lng),
                    category: Category::Safety,
                    subcategory: "Crosswalk needed".into(),
                    urgency: Urgency::High,
                    notes: "No crosswalk for 3 blocks".into(),
                },
            )
            .unwrap()
        }
    }
}
