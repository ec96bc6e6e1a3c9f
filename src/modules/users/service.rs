use courseware_core::AppError;
use courseware_db::{SqlitePool, UserStore};
use courseware_models::{NewUser, PublicUser};
use tracing::instrument;

pub struct UserService;

impl UserService {
    /// Registers a user. Validation and duplicate-email failures arrive as
    /// normalized 400s.
    #[instrument(skip(db, input), fields(email = ?input.email_address))]
    pub async fn create_user(
        db: &SqlitePool,
        input: NewUser,
        bcrypt_cost: u32,
    ) -> Result<PublicUser, AppError> {
        let identity = UserStore::create(db, input, bcrypt_cost).await?;
        Ok(identity.public())
    }
}
