#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use messenger_client::auth::{self, Identity};
    use messenger_client::group::model::NewGroup;
    use messenger_client::group::{self, Group};
    use messenger_client::integration::{self, ChatApi};
    use messenger_client::selection::{Chat, Resolved};
    use messenger_client::user::{self, User};
    use messenger_client::{Kind, Session};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Users,
        Groups,
        Create(String, Vec<user::Id>),
    }

    #[derive(Default)]
    struct Backend {
        calls: Mutex<Vec<Call>>,
        users: Mutex<VecDeque<integration::Result<Vec<User>>>>,
        groups: Mutex<VecDeque<integration::Result<Vec<Group>>>>,
    }

    fn unavailable() -> integration::Error {
        integration::Error::UnexpectedStatus {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            path: "test".into(),
        }
    }

    #[async_trait]
    impl ChatApi for Backend {
        async fn find_users(&self) -> integration::Result<Vec<User>> {
            self.calls.lock().unwrap().push(Call::Users);
            self.users.lock().unwrap().pop_front().unwrap_or(Ok(vec![]))
        }

        async fn find_groups(&self) -> integration::Result<Vec<Group>> {
            self.calls.lock().unwrap().push(Call::Groups);
            self.groups.lock().unwrap().pop_front().unwrap_or(Ok(vec![]))
        }

        async fn create_group(&self, g: &NewGroup<'_>) -> integration::Result<Option<Group>> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(g.name().to_string(), g.members().to_vec()));
            Ok(None)
        }
    }

    fn id(s: &str) -> user::Id {
        user::Id::from(s)
    }

    fn directory() -> Vec<User> {
        vec![
            User::new("a", "Jora", None),
            User::new("b", "Valera", Some("/valera.png")),
            User::new("c", "Radu", None),
        ]
    }

    async fn session(backend: &Arc<Backend>, online: &[&str]) -> Session {
        let identity = Identity::new();
        identity.set_auth_user(Some(auth::User::new("a", "Jora"))).await;
        identity.set_online_users(online.iter().map(|s| id(s))).await;
        Session::new(backend.clone(), Arc::new(identity))
    }

    #[tokio::test]
    async fn should_show_online_contacts() {
        let backend = Arc::new(Backend::default());
        backend.users.lock().unwrap().push_back(Ok(directory()));
        let session = session(&backend, &["a", "b"]).await;

        session.refresh().await.unwrap();

        let online = session.visible_contacts(true).await.unwrap();
        assert_eq!(online, vec![User::new("b", "Valera", Some("/valera.png"))]);
        assert_eq!(session.online_count().await.unwrap(), 1);

        let all = session.visible_contacts(false).await.unwrap();
        assert_eq!(all.len(), directory().len() - 1);
        assert!(session.is_online(&id("b")).await);
        assert!(!session.is_online(&id("c")).await);
    }

    #[tokio::test]
    async fn should_require_authenticated_user() {
        let backend = Arc::new(Backend::default());
        let session = Session::new(backend.clone(), Arc::new(Identity::new()));

        let actual = session.visible_contacts(false).await;

        assert_eq!(actual.unwrap_err().kind(), Kind::Unauthenticated);
        assert!(session.new_group_draft().await.is_err());
    }

    #[tokio::test]
    async fn should_keep_users_when_fetch_fails() {
        let backend = Arc::new(Backend::default());
        backend.users.lock().unwrap().push_back(Ok(directory()));
        backend.users.lock().unwrap().push_back(Err(unavailable()));
        let session = session(&backend, &["a"]).await;
        session.fetch_users().await.unwrap();

        let actual = session.fetch_users().await;

        assert_eq!(actual.unwrap_err().kind(), Kind::Transport);
        assert_eq!(session.users().await.to_vec(), directory());
        assert!(!session.is_users_loading());
    }

    #[tokio::test]
    async fn should_tolerate_stale_group_selection() {
        let backend = Arc::new(Backend::default());
        let team = Group::new("gx", "Team", &[id("a"), id("b")]);
        backend.groups.lock().unwrap().push_back(Ok(vec![team.clone()]));
        backend.groups.lock().unwrap().push_back(Ok(vec![]));
        let session = session(&backend, &["a"]).await;
        session.fetch_groups().await.unwrap();

        session.select(&team).await;
        assert_eq!(session.resolved_selection().await, Some(Resolved::Group(team.clone())));

        session.fetch_groups().await.unwrap();

        assert_eq!(session.current_selection().await, Some(Chat::Group(group::Id::from("gx"))));
        assert!(session.is_selected(&team).await);
        assert_eq!(session.resolved_selection().await, None);
        assert!(session.directory().group(team.id()).await.is_none());
    }

    #[tokio::test]
    async fn should_create_group_through_draft() {
        let backend = Arc::new(Backend::default());
        backend.users.lock().unwrap().push_back(Ok(directory()));
        let created = Group::new("g1", "Team", &[id("a"), id("b"), id("c")]);
        backend.groups.lock().unwrap().push_back(Ok(vec![]));
        backend.groups.lock().unwrap().push_back(Ok(vec![created.clone()]));
        let session = session(&backend, &["a"]).await;
        session.refresh().await.unwrap();

        let candidates = session.candidates().await.unwrap();
        let mut draft = session.new_group_draft().await.unwrap();
        draft.set_name("Team");
        for u in &candidates {
            draft.toggle_participant(u.id());
        }
        draft.toggle_participant(&id("a"));
        session.submit_draft(&mut draft).await.unwrap();

        assert!(draft.participants().is_empty());
        assert_eq!(session.groups().await.to_vec(), vec![created]);
        let calls = backend.calls.lock().unwrap().clone();
        assert_eq!(
            calls[calls.len() - 2..],
            [Call::Create("Team".into(), vec![id("b"), id("c")]), Call::Groups]
        );
    }

    #[tokio::test]
    async fn should_keep_draft_when_refresh_fails() {
        let backend = Arc::new(Backend::default());
        backend.groups.lock().unwrap().push_back(Err(unavailable()));
        let session = session(&backend, &["a"]).await;

        let mut draft = session.new_group_draft().await.unwrap();
        draft.set_name("Team");
        draft.toggle_participant(&id("u1"));
        draft.toggle_participant(&id("u2"));
        let actual = session.submit_draft(&mut draft).await;

        assert_eq!(actual.unwrap_err().kind(), Kind::Transport);
        assert_eq!(draft.name(), "Team");
        assert_eq!(draft.participants(), &[id("u1"), id("u2")]);
    }

    #[tokio::test]
    async fn should_validate_before_any_request() {
        let backend = Arc::new(Backend::default());
        let session = session(&backend, &["a"]).await;

        let blank = session.create_group("   ", &[id("b")]).await;
        let nobody = session.create_group("Team", &[]).await;

        assert_eq!(blank.unwrap_err().kind(), Kind::Validation);
        assert_eq!(nobody.unwrap_err().kind(), Kind::Validation);
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_clear_state_on_close() {
        let backend = Arc::new(Backend::default());
        backend.users.lock().unwrap().push_back(Ok(directory()));
        let session = session(&backend, &["a"]).await;
        session.refresh().await.unwrap();
        session.select(Chat::User(id("b"))).await;

        session.close().await;

        assert!(session.users().await.is_empty());
        assert!(session.groups().await.is_empty());
        assert_eq!(session.current_selection().await, None);
    }

    #[tokio::test]
    async fn should_resolve_user_selection() {
        let backend = Arc::new(Backend::default());
        backend.users.lock().unwrap().push_back(Ok(directory()));
        let session = session(&backend, &["a"]).await;
        session.fetch_users().await.unwrap();

        session.select(&directory()[2]).await;

        match session.resolved_selection().await {
            Some(Resolved::User(u)) => assert_eq!(u.full_name(), "Radu"),
            other => panic!("unexpected selection: {other:?}"),
        }
        session.clear_selection().await;
        assert_eq!(session.resolved_selection().await, None);
    }
}
