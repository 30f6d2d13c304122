//! # Profile Projector
//!
//! Combines the state slice, the intent table and the friendships tab cache
//! into one [`ProfileView`]:
//!
//! ```text
//! AppState + RouteParams → read_profile_slice → branch → Ok(view model) | Error(error view)
//! ```
//!
//! The branch runs before anything else: a tracking record of any kind other
//! than a trackable user degrades to [`ProfileView::Error`]. Projection is
//! synchronous and pure apart from reading the tab cache.

use crate::config::ProfileConfig;
use crate::core::{CounterpartyType, FolderPath, IntentTable};
use crate::errors::ProfileError;
use crate::identity::Username;
use crate::reader::{read_profile_slice, ProfileSlice};
use crate::routing::RouteParams;
use crate::state::{AppState, MissingProof, Proof, TrackerKind, TrackingRecord};
use crate::tab_cache::{FriendshipsTab, FriendshipsTabCache};
use crate::views::{
    BioEditFns, Callback, Callback1, ErrorViewModel, HeaderView, ProfileView, ProfileViewModel,
    NON_USER_PROFILE_ERROR,
};
use std::sync::Arc;

/// Projects application state into profile views
#[derive(Debug, Clone)]
pub struct Projector {
    intents: IntentTable,
    tabs: Arc<FriendshipsTabCache>,
    config: ProfileConfig,
}

impl Projector {
    /// Create a projector over `intents` and a shared tab cache.
    pub fn new(intents: IntentTable, tabs: Arc<FriendshipsTabCache>, config: ProfileConfig) -> Self {
        Self {
            intents,
            tabs,
            config,
        }
    }

    /// Friendships tab cache shared with the view models
    pub fn tabs(&self) -> &Arc<FriendshipsTabCache> {
        &self.tabs
    }

    /// Read the profile slice for `route` and project it.
    ///
    /// Only usage errors (mixed-case or missing username) are returned as
    /// `Err`; a wrong-kind tracking record yields `Ok(ProfileView::Error(..))`.
    pub fn project(
        &self,
        state: &AppState,
        route: &RouteParams,
    ) -> Result<ProfileView, ProfileError> {
        let slice = read_profile_slice(state, route, &self.config.profile_root_tab)?;
        Ok(self.project_slice(slice))
    }

    /// Project an already extracted slice.
    pub fn project_slice(&self, slice: ProfileSlice) -> ProfileView {
        let target = slice.target_username.clone();
        let wrong_kind = slice
            .tracking
            .as_ref()
            .map(|entry| entry.kind())
            .filter(|kind| *kind != TrackerKind::TrackableUser);

        let view = match wrong_kind {
            Some(kind) => {
                tracing::warn!(
                    target_user = %target,
                    kind = kind.as_str(),
                    "{NON_USER_PROFILE_ERROR}"
                );
                ProfileView::Error(ErrorViewModel {
                    message: NON_USER_PROFILE_ERROR.to_string(),
                    back_action: self.back_action(slice.profile_is_root),
                })
            }
            None => ProfileView::Ok(Box::new(self.build_view_model(slice))),
        };

        tracing::debug!(target_user = %target, view = view.label(), "profile projected");
        view
    }

    /// Header actions for a projected view.
    pub fn header(&self, view: &ProfileView) -> HeaderView {
        HeaderView::from(view)
    }

    fn build_view_model(&self, slice: ProfileSlice) -> ProfileViewModel {
        let ProfileSlice {
            my_username,
            target_username,
            is_in_any_team,
            tracking,
            profile_is_root,
        } = slice;

        let record = tracking.and_then(|entry| entry.into_trackable());
        let loading = record.as_ref().map_or(true, TrackingRecord::is_loading) && !self.config.testing;
        // Absent record: empty lists, nothing loaded.
        let record = record.unwrap_or_default();

        let is_you = my_username.as_ref() == Some(&target_username);
        let bio_edit_fns = is_you.then(|| self.bio_edit_fns());

        let copy_address = {
            let intents = self.intents.clone();
            let address = record
                .stellar_federation_address
                .clone()
                .filter(|address| !address.is_empty());
            let callback: Callback = Arc::new(move || match &address {
                Some(address) => intents.copy_stellar_address(address),
                None => tracing::trace!("no stellar address, skipping copy"),
            });
            callback
        };

        let open_private_folder = {
            let mine = my_username.clone();
            self.bind(&target_username, move |intents, theirs| {
                intents.open_private_folder(mine.as_ref(), theirs);
            })
        };

        let send_or_request = {
            let intents = self.intents.clone();
            let to = target_username.clone();
            let callback: Callback1<bool> = Arc::new(move |is_request| {
                intents.send_or_request_lumens(&to, is_request, CounterpartyType::KeybaseUser);
            });
            callback
        };

        let change_tab = {
            let tabs = Arc::clone(&self.tabs);
            let callback: Callback1<FriendshipsTab> = Arc::new(move |tab| tabs.write(tab));
            callback
        };

        ProfileViewModel {
            is_you,
            you_are_in_teams: is_in_any_team,
            user_info: record.user_info,
            proofs: record.proofs,
            tracker_status: record.tracker_status,
            currently_following: record.currently_following,
            folders: record.folders,
            team_showcase: record.team_showcase,
            stellar_federation_address: record.stellar_federation_address,
            followers: record.trackers,
            following: record.tracking,
            followers_loaded: record.trackers_loaded,
            loading,
            current_friendships_tab: self.tabs.read(),

            bio_edit_fns,
            on_back: self.back_action(profile_is_root),

            on_accept_proofs: self.bind(&target_username, IntentTable::follow),
            on_add_to_team: self.bind(&target_username, IntentTable::add_to_team),
            on_browse_public_folder: self
                .bind(&target_username, IntentTable::browse_public_folder),
            on_chat: self.bind(&target_username, IntentTable::chat),
            on_click_avatar: self.bind(&target_username, IntentTable::click_avatar),
            on_click_showcase_offer: self.bind_unit(IntentTable::click_showcase_offer),
            on_copy_stellar_address: copy_address,
            on_follow: self.bind(&target_username, IntentTable::follow),
            on_unfollow: self.bind(&target_username, IntentTable::unfollow),
            on_open_private_folder: open_private_folder,
            on_request_lumens: self.bind(&target_username, |intents, to| {
                intents.send_or_request_lumens(to, true, CounterpartyType::KeybaseUser);
            }),
            on_send_lumens: self.bind(&target_username, |intents, to| {
                intents.send_or_request_lumens(to, false, CounterpartyType::KeybaseUser);
            }),
            on_search: self.bind_unit(IntentTable::search),
            refresh: self.bind(&target_username, |intents, username| {
                intents.get_profile(username);
                intents.update_trackers(username);
            }),

            on_send_or_request_stellar_address: send_or_request,
            on_change_friendships_tab: change_tab,
            on_user_click: self.bind_arg(|intents, username: Username| {
                intents.user_click(&username);
            }),
            on_folder_click: self.bind_arg(|intents, path: FolderPath| {
                intents.folder_click(&path);
            }),
            on_missing_proof_click: self.bind_arg(|intents, missing: MissingProof| {
                intents.missing_proof_click(&missing);
            }),
            on_recheck_proof: self.bind_arg(|intents, proof: Proof| intents.recheck_proof(&proof)),
            on_revoke_proof: self.bind_arg(|intents, proof: Proof| intents.revoke_proof(&proof)),
            on_view_proof: self.bind_arg(|intents, proof: Proof| intents.view_proof(&proof)),
            on_file_picker_error: self.bind_arg(|intents, message: String| {
                intents.file_picker_error(&message);
            }),

            username: target_username,
        }
    }

    fn bio_edit_fns(&self) -> BioEditFns {
        BioEditFns {
            on_bio_edit: self.bind_unit(IntentTable::edit_profile),
            on_edit_avatar_click: self.bind_arg(IntentTable::edit_avatar),
            on_edit_profile: self.bind_unit(IntentTable::edit_profile),
            on_location_edit: self.bind_unit(IntentTable::edit_profile),
            on_name_edit: self.bind_unit(IntentTable::edit_profile),
        }
    }

    /// No back action at the root: there is nowhere to go.
    fn back_action(&self, profile_is_root: bool) -> Option<Callback> {
        (!profile_is_root).then(|| self.bind_unit(IntentTable::navigate_up))
    }

    fn bind<F>(&self, username: &Username, action: F) -> Callback
    where
        F: Fn(&IntentTable, &Username) + Send + Sync + 'static,
    {
        let intents = self.intents.clone();
        let username = username.clone();
        Arc::new(move || action(&intents, &username))
    }

    fn bind_unit<F>(&self, action: F) -> Callback
    where
        F: Fn(&IntentTable) + Send + Sync + 'static,
    {
        let intents = self.intents.clone();
        Arc::new(move || action(&intents))
    }

    fn bind_arg<T, F>(&self, action: F) -> Callback1<T>
    where
        T: 'static,
        F: Fn(&IntentTable, T) + Send + Sync + 'static,
    {
        let intents = self.intents.clone();
        Arc::new(move |arg| action(&intents, arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ProfileIntent, RecordingDispatcher, Route};
    use crate::routing::{RoutePath, PEOPLE_TAB};
    use crate::state::{Folder, NonUserRecord, UserInfo};
    use assert_matches::assert_matches;

    fn user(name: &str) -> Username {
        Username::parse(name).unwrap()
    }

    fn projector(config: ProfileConfig) -> (Projector, RecordingDispatcher) {
        let recorder = RecordingDispatcher::new();
        let projector = Projector::new(
            IntentTable::new(Arc::new(recorder.clone())),
            Arc::new(FriendshipsTabCache::new()),
            config,
        );
        (projector, recorder)
    }

    fn slice(my: Option<&str>, target: &str) -> ProfileSlice {
        ProfileSlice {
            my_username: my.map(user),
            target_username: user(target),
            is_in_any_team: false,
            tracking: None,
            profile_is_root: false,
        }
    }

    fn non_user_entry() -> crate::state::TrackerEntry {
        crate::state::TrackerEntry::NonUserTracker(NonUserRecord {
            service_name: "twitter".to_string(),
            username: "bob".to_string(),
            invite_link: None,
        })
    }

    #[test]
    fn test_self_profile_without_record() {
        let (projector, _) = projector(ProfileConfig::testing());
        let view = projector.project_slice(slice(Some("alice"), "alice"));
        let model = view.ok().unwrap();
        assert!(model.is_you);
        assert!(model.bio_edit_fns.is_some());
        assert!(model.followers.is_empty());
        assert!(model.following.is_empty());
        assert!(!model.followers_loaded);
        assert!(!model.loading);
    }

    #[test]
    fn test_missing_record_is_loading_outside_tests() {
        let (projector, _) = projector(ProfileConfig::default());
        let view = projector.project_slice(slice(Some("alice"), "bob"));
        assert!(view.ok().unwrap().loading);
    }

    #[test]
    fn test_other_profile_has_no_bio_edit() {
        let (projector, _) = projector(ProfileConfig::testing());
        let view = projector.project_slice(slice(Some("alice"), "bob"));
        let model = view.ok().unwrap();
        assert!(!model.is_you);
        assert!(model.bio_edit_fns.is_none());
    }

    #[test]
    fn test_non_user_record_degrades_to_error() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(non_user_entry());
        let view = projector.project_slice(input);
        let error = view.error().unwrap();
        assert_eq!(error.message, NON_USER_PROFILE_ERROR);

        (error.back_action.as_ref().unwrap())();
        assert_eq!(recorder.take(), vec![ProfileIntent::NavigateUp]);
    }

    #[test]
    fn test_error_at_root_has_no_back_action() {
        let (projector, _) = projector(ProfileConfig::testing());
        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(non_user_entry());
        input.profile_is_root = true;
        let view = projector.project_slice(input);
        assert_matches!(view, ProfileView::Error(ErrorViewModel { back_action: None, .. }));
    }

    #[test]
    fn test_record_fields_flow_through() {
        let (projector, _) = projector(ProfileConfig::default());
        let record = TrackingRecord {
            user_info: Some(UserInfo {
                full_name: "Bob".to_string(),
                followers_count: Some(1),
                ..UserInfo::default()
            }),
            trackers_loaded: true,
            currently_following: true,
            ..TrackingRecord::default()
        };
        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(crate::state::TrackerEntry::TrackableUser(record));
        input.is_in_any_team = true;
        let view = projector.project_slice(input);
        let model = view.ok().unwrap();
        assert!(model.followers_loaded);
        assert!(!model.loading);
        assert!(model.currently_following);
        assert!(model.you_are_in_teams);
        assert_eq!(model.user_info.as_ref().unwrap().full_name, "Bob");
    }

    #[test]
    fn test_refresh_fetches_profile_then_trackers() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let view = projector.project_slice(slice(Some("alice"), "bob"));
        (view.ok().unwrap().refresh)();
        assert_eq!(
            recorder.take(),
            vec![
                ProfileIntent::GetProfile {
                    username: user("bob")
                },
                ProfileIntent::UpdateTrackers {
                    username: user("bob")
                },
            ]
        );
    }

    #[test]
    fn test_copy_address_skipped_when_empty() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(crate::state::TrackerEntry::TrackableUser(TrackingRecord {
            stellar_federation_address: Some(String::new()),
            ..TrackingRecord::default()
        }));
        let view = projector.project_slice(input);
        (view.ok().unwrap().on_copy_stellar_address)();
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_copy_address_forwarded_when_present() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(crate::state::TrackerEntry::TrackableUser(TrackingRecord {
            stellar_federation_address: Some("bob*keybase.io".to_string()),
            ..TrackingRecord::default()
        }));
        let view = projector.project_slice(input);
        (view.ok().unwrap().on_copy_stellar_address)();
        assert_eq!(
            recorder.take(),
            vec![ProfileIntent::CopyToClipboard {
                text: "bob*keybase.io".to_string()
            }]
        );
    }

    #[test]
    fn test_lumens_actions_forward_request_flag() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let view = projector.project_slice(slice(Some("alice"), "bob"));
        let model = view.ok().unwrap();
        (model.on_request_lumens)();
        (model.on_send_lumens)();
        (model.on_send_or_request_stellar_address)(true);
        (model.on_send_or_request_stellar_address)(false);

        let form = |is_request| ProfileIntent::OpenSendRequestForm {
            from: None,
            to: user("bob"),
            is_request,
            recipient_type: CounterpartyType::KeybaseUser,
        };
        assert_eq!(
            recorder.take(),
            vec![form(true), form(false), form(true), form(false)]
        );
    }

    #[test]
    fn test_target_bound_actions() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let view = projector.project_slice(slice(Some("alice"), "bob"));
        let model = view.ok().unwrap();
        (model.on_accept_proofs)();
        (model.on_add_to_team)();
        (model.on_click_avatar)();
        assert_eq!(
            recorder.take(),
            vec![
                ProfileIntent::Follow {
                    username: user("bob"),
                    local_ignore: false,
                },
                ProfileIntent::ClearAddUserToTeamsResults,
                ProfileIntent::NavigateAppend {
                    route: Route::AddToTeam {
                        username: user("bob")
                    },
                    parent: None,
                },
                ProfileIntent::ClickAvatar {
                    username: user("bob")
                },
            ]
        );
    }

    #[test]
    fn test_projected_folders_can_be_opened() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let shared = FolderPath::private([&user("bob"), &user("alice")]);
        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(crate::state::TrackerEntry::TrackableUser(TrackingRecord {
            folders: vec![
                Folder {
                    path: FolderPath::public(&user("bob")),
                },
                Folder {
                    path: shared.clone(),
                },
            ],
            ..TrackingRecord::default()
        }));
        let view = projector.project_slice(input);
        let model = view.ok().unwrap();
        for folder in &model.folders {
            (model.on_folder_click)(folder.path.clone());
        }
        assert_eq!(
            recorder.take(),
            vec![
                ProfileIntent::OpenPathInFilesTab {
                    path: FolderPath::public(&user("bob"))
                },
                ProfileIntent::OpenPathInFilesTab { path: shared },
            ]
        );
    }

    #[test]
    fn test_change_tab_survives_reprojection() {
        let (projector, _) = projector(ProfileConfig::testing());
        let first = projector.project_slice(slice(Some("alice"), "bob"));
        let model = first.ok().unwrap();
        assert_eq!(model.current_friendships_tab, FriendshipsTab::Followers);
        (model.on_change_friendships_tab)(FriendshipsTab::Following);
        // The projected value itself is immutable.
        assert_eq!(model.current_friendships_tab, FriendshipsTab::Followers);

        let second = projector.project_slice(slice(Some("alice"), "bob"));
        assert_eq!(
            second.ok().unwrap().current_friendships_tab,
            FriendshipsTab::Following
        );
    }

    #[test]
    fn test_bio_edit_opens_editor() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let view = projector.project_slice(slice(Some("alice"), "alice"));
        let edit = view.ok().unwrap().bio_edit_fns.clone().unwrap();
        (edit.on_name_edit)();
        (edit.on_edit_avatar_click)(None);
        assert_eq!(
            recorder.take(),
            vec![
                ProfileIntent::NavigateAppend {
                    route: Route::EditProfile,
                    parent: None
                },
                ProfileIntent::NavigateAppend {
                    route: Route::EditAvatar { image: None },
                    parent: None
                },
            ]
        );
    }

    #[test]
    fn test_project_reads_route() {
        let (projector, _) = projector(ProfileConfig::testing());
        let state = AppState::logged_in(user("alice"));
        let route = RouteParams::default().with_path(RoutePath::new([PEOPLE_TAB]));
        let view = projector.project(&state, &route).unwrap();
        let model = view.ok().unwrap();
        assert_eq!(model.username, user("alice"));
        assert!(model.on_back.is_none());
    }

    #[test]
    fn test_header_follows_variant() {
        let (projector, recorder) = projector(ProfileConfig::testing());
        let ok = projector.project_slice(slice(Some("alice"), "bob"));
        let header = projector.header(&ok);
        assert!(header.on_back.is_some());
        (header.on_search.unwrap())();
        assert_eq!(recorder.take().len(), 2);

        let mut input = slice(Some("alice"), "bob");
        input.tracking = Some(non_user_entry());
        let error = projector.project_slice(input);
        let header = projector.header(&error);
        assert!(header.on_back.is_none());
        assert!(header.on_search.is_none());
    }
}
