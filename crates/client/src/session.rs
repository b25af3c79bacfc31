//! The client session state machine.
//!
//! ```text
//! Desconocido (cargando) --cargar()--> Autenticado | Anonimo
//! Autenticado --logout() / 401 observed--> Anonimo
//! Anonimo --login()--> Autenticado
//! ```
//!
//! On startup, a persisted token makes the cache optimistically
//! authenticated while the profile fetch revalidates it; any failure
//! clears the store and settles on anonymous.

use crate::api::{AuthApi, UsuarioActual};
use crate::error::ClientError;
use crate::store::{SessionStore, TOKEN_KEY, USUARIO_KEY};

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum EstadoSesion {
    /// Initial state: persisted credentials not yet validated.
    Desconocido,
    /// A validated (or optimistically trusted) identity.
    Autenticado(UsuarioActual),
    /// No session.
    Anonimo,
}

/// Client-side session cache: holds the current token and decoded user
/// profile for the lifetime of the session, rehydrates on startup, and
/// clears on logout.
pub struct SesionCache<A, S> {
    api: A,
    store: S,
    estado: EstadoSesion,
    token: Option<String>,
}

impl<A: AuthApi, S: SessionStore> SesionCache<A, S> {
    /// A fresh cache in the `Desconocido` state. Call [`Self::cargar`]
    /// to resolve it.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            estado: EstadoSesion::Desconocido,
            token: None,
        }
    }

    /// True until the initial [`Self::cargar`] has settled the state.
    pub fn cargando(&self) -> bool {
        self.estado == EstadoSesion::Desconocido
    }

    /// The current identity, or `None` when anonymous or still loading.
    pub fn usuario(&self) -> Option<&UsuarioActual> {
        match &self.estado {
            EstadoSesion::Autenticado(usuario) => Some(usuario),
            _ => None,
        }
    }

    /// The current bearer token, for attaching to API requests.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn estado(&self) -> &EstadoSesion {
        &self.estado
    }

    /// Resolve the initial state from persisted storage.
    ///
    /// With no stored token the cache settles `Anonimo` without any
    /// network traffic. With one, the stored profile is trusted
    /// optimistically while `me()` revalidates; any failure clears
    /// everything.
    pub async fn cargar(&mut self) {
        let Some(token) = self.store.get(TOKEN_KEY) else {
            self.estado = EstadoSesion::Anonimo;
            return;
        };

        // Optimistic: show the persisted profile while revalidating.
        if let Some(raw) = self.store.get(USUARIO_KEY) {
            if let Ok(usuario) = serde_json::from_str::<UsuarioActual>(&raw) {
                self.estado = EstadoSesion::Autenticado(usuario);
            }
        }
        self.token = Some(token.clone());

        match self.api.me(&token).await {
            Ok(usuario) => {
                self.persist_usuario(&usuario);
                self.estado = EstadoSesion::Autenticado(usuario);
            }
            Err(e) => {
                tracing::debug!(error = %e, "La sesión persistida no es válida");
                self.limpiar();
            }
        }
    }

    /// Authenticate and enter `Autenticado`.
    ///
    /// On failure the state is untouched (an already-authenticated
    /// session survives a failed re-login attempt) and the error is
    /// surfaced for the UI.
    pub async fn login(&mut self, correo: &str, password: &str) -> Result<(), ClientError> {
        let token = self.api.login(correo, password).await?;
        let usuario = match self.api.me(&token).await {
            Ok(usuario) => usuario,
            Err(e) => {
                // Token issued but profile fetch failed: do not keep a
                // half-open session.
                self.limpiar();
                return Err(e);
            }
        };

        self.store.set(TOKEN_KEY, &token);
        self.persist_usuario(&usuario);
        self.token = Some(token);
        self.estado = EstadoSesion::Autenticado(usuario);
        Ok(())
    }

    /// Clear the session. Idempotent: logging out while anonymous is a
    /// no-op and never errors.
    pub fn logout(&mut self) {
        self.limpiar();
    }

    /// React to an API error observed elsewhere in the application:
    /// a 401 means the token died (expired, revoked build, clock skew)
    /// and drops the session to `Anonimo`. Other errors leave it alone.
    pub fn observar_error(&mut self, error: &ClientError) {
        if matches!(error, ClientError::NoAutenticado) {
            self.limpiar();
        }
    }

    fn persist_usuario(&self, usuario: &UsuarioActual) {
        match serde_json::to_string(usuario) {
            Ok(raw) => self.store.set(USUARIO_KEY, &raw),
            Err(e) => tracing::warn!(error = %e, "No se pudo serializar el usuario"),
        }
    }

    fn limpiar(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USUARIO_KEY);
        self.token = None;
        self.estado = EstadoSesion::Anonimo;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use pcg_core::rol::Rol;

    use super::*;
    use crate::store::MemoryStore;

    /// Fake transport: a fixed credential pair and a set of tokens it
    /// considers valid.
    struct FakeApi {
        correo: String,
        password: String,
        usuario: UsuarioActual,
        valid_tokens: Mutex<HashMap<String, bool>>,
        emitted: Mutex<u32>,
    }

    impl FakeApi {
        fn new(correo: &str, password: &str, rol: Rol) -> Self {
            Self {
                correo: correo.to_string(),
                password: password.to_string(),
                usuario: UsuarioActual {
                    id: 1,
                    nombre: "Usuaria de Prueba".to_string(),
                    correo: correo.to_string(),
                    rol,
                    rol_id: rol.id(),
                    estado_id: 1,
                },
                valid_tokens: Mutex::new(HashMap::new()),
                emitted: Mutex::new(0),
            }
        }

        fn mint_valid(&self, token: &str) {
            self.valid_tokens
                .lock()
                .unwrap()
                .insert(token.to_string(), true);
        }

        fn expire_all(&self) {
            self.valid_tokens.lock().unwrap().clear();
        }
    }

    #[async_trait]
    impl AuthApi for &FakeApi {
        async fn login(&self, correo: &str, password: &str) -> Result<String, ClientError> {
            if correo != self.correo || password != self.password {
                return Err(ClientError::CredencialesInvalidas);
            }
            let mut emitted = self.emitted.lock().unwrap();
            *emitted += 1;
            let token = format!("token-{}", *emitted);
            self.mint_valid(&token);
            Ok(token)
        }

        async fn me(&self, token: &str) -> Result<UsuarioActual, ClientError> {
            if self.valid_tokens.lock().unwrap().contains_key(token) {
                Ok(self.usuario.clone())
            } else {
                Err(ClientError::NoAutenticado)
            }
        }
    }

    #[tokio::test]
    async fn starts_unknown_then_settles_anonymous_without_token() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Investigador);
        let mut cache = SesionCache::new(&api, MemoryStore::new());

        assert!(cache.cargando());
        cache.cargar().await;
        assert!(!cache.cargando());
        assert_eq!(cache.estado(), &EstadoSesion::Anonimo);
        assert!(cache.usuario().is_none());
    }

    #[tokio::test]
    async fn login_then_reload_yields_same_identity() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Lider);
        let store = MemoryStore::new();

        let mut cache = SesionCache::new(&api, &store);
        cache.cargar().await;
        cache.login("a@b.co", "clave").await.expect("login ok");
        let antes = cache.usuario().cloned().expect("authenticated");

        // Simulate a page reload: a fresh cache over the same store.
        let mut recargada = SesionCache::new(&api, &store);
        recargada.cargar().await;

        assert_eq!(recargada.usuario(), Some(&antes));
        assert!(recargada.token().is_some());
    }

    #[tokio::test]
    async fn invalid_persisted_token_clears_and_settles_anonymous() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Investigador);
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "token-muerto");
        store.set(USUARIO_KEY, "{\"esto no\": \"parsea\"");

        let mut cache = SesionCache::new(&api, &store);
        cache.cargar().await;

        assert_eq!(cache.estado(), &EstadoSesion::Anonimo);
        assert_eq!(store.get(TOKEN_KEY), None, "stale token must be cleared");
        assert_eq!(store.get(USUARIO_KEY), None);
    }

    #[tokio::test]
    async fn expiry_between_sessions_logs_out() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Investigador);
        let store = MemoryStore::new();

        let mut cache = SesionCache::new(&api, &store);
        cache.cargar().await;
        cache.login("a@b.co", "clave").await.expect("login ok");

        // The token dies server-side (expiry).
        api.expire_all();

        let mut recargada = SesionCache::new(&api, &store);
        recargada.cargar().await;
        assert_eq!(recargada.estado(), &EstadoSesion::Anonimo);
    }

    #[tokio::test]
    async fn wrong_credentials_surface_and_leave_state_alone() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Investigador);
        let mut cache = SesionCache::new(&api, MemoryStore::new());
        cache.cargar().await;

        let err = cache.login("a@b.co", "incorrecta").await.unwrap_err();
        assert_matches!(err, ClientError::CredencialesInvalidas);
        assert_eq!(cache.estado(), &EstadoSesion::Anonimo);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Investigador);
        let store = MemoryStore::new();
        let mut cache = SesionCache::new(&api, &store);
        cache.cargar().await;
        cache.login("a@b.co", "clave").await.expect("login ok");

        cache.logout();
        assert_eq!(cache.estado(), &EstadoSesion::Anonimo);
        assert_eq!(store.get(TOKEN_KEY), None);

        // Logging out again changes nothing and does not panic.
        cache.logout();
        assert_eq!(cache.estado(), &EstadoSesion::Anonimo);
    }

    #[tokio::test]
    async fn observed_401_drops_session() {
        let api = FakeApi::new("a@b.co", "clave", Rol::Investigador);
        let mut cache = SesionCache::new(&api, MemoryStore::new());
        cache.cargar().await;
        cache.login("a@b.co", "clave").await.expect("login ok");

        cache.observar_error(&ClientError::NoAutenticado);
        assert_eq!(cache.estado(), &EstadoSesion::Anonimo);

        // A 403 must NOT log the user out.
        cache.login("a@b.co", "clave").await.expect("login ok");
        cache.observar_error(&ClientError::Prohibido);
        assert_matches!(cache.estado(), EstadoSesion::Autenticado(_));
    }

    #[tokio::test]
    async fn admin_helper_reflects_role() {
        let api = FakeApi::new("root@b.co", "clave", Rol::Admin);
        let mut cache = SesionCache::new(&api, MemoryStore::new());
        cache.cargar().await;
        cache.login("root@b.co", "clave").await.expect("login ok");
        assert!(cache.usuario().unwrap().es_admin());
    }
}
