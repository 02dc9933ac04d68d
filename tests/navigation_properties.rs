use welltune::commands::{parse_operations, run_simulation};
use welltune::{ScreenId, SideEffect, SignInPolicy, Tab, Theme, ViewCommand, ViewController};

const ALL_COMMANDS: [ViewCommand; 8] = [
    ViewCommand::SignIn,
    ViewCommand::CompleteOnboarding,
    ViewCommand::SelectRoutine,
    ViewCommand::ExitRoutineDetail,
    ViewCommand::NavigateTo(Tab::Dashboard),
    ViewCommand::NavigateTo(Tab::Discover),
    ViewCommand::NavigateTo(Tab::Profile),
    ViewCommand::ToggleTheme,
];

const POLICIES: [SignInPolicy; 2] = [SignInPolicy::SkipOnboarding, SignInPolicy::RequireOnboarding];

/// Every command sequence of exactly `len` steps
fn sequences(len: usize) -> Vec<Vec<ViewCommand>> {
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                ALL_COMMANDS.iter().map(move |&cmd| {
                    let mut next = prefix.clone();
                    next.push(cmd);
                    next
                })
            })
            .collect();
    }
    out
}

fn active_controller() -> ViewController {
    let mut controller = ViewController::new(Theme::Dark, SignInPolicy::SkipOnboarding);
    controller.sign_in();
    controller
}

#[test]
fn test_signed_out_always_shows_sign_in() {
    for policy in POLICIES {
        for len in 0..=5 {
            for seq in sequences(len) {
                let mut controller = ViewController::new(Theme::Dark, policy);
                for cmd in &seq {
                    let snapshot = controller.process(*cmd).snapshot;
                    if !snapshot.authenticated {
                        assert_eq!(snapshot.screen, ScreenId::SignIn, "{:?}", seq);
                    }
                    if snapshot.screen == ScreenId::Onboarding {
                        assert!(snapshot.authenticated && snapshot.onboarding_pending);
                    }
                }
            }
        }
    }
}

#[test]
fn test_unchanged_results_carry_no_side_effects() {
    for seq in sequences(4) {
        let mut controller = ViewController::new(Theme::Light, SignInPolicy::RequireOnboarding);
        for cmd in seq {
            let before = controller.snapshot();
            let result = controller.process(cmd);
            if result.changed {
                assert_ne!(before, result.snapshot);
            } else {
                assert_eq!(before, result.snapshot);
                assert!(result.side_effects.is_empty());
            }
            let mounted = result
                .side_effects
                .iter()
                .any(|e| matches!(e, SideEffect::Mount(_)));
            assert_eq!(mounted, before.screen != result.snapshot.screen);
        }
    }
}

#[test]
fn test_sign_in_once_or_twice_lands_on_discover() {
    let mut controller = ViewController::new(Theme::Dark, SignInPolicy::SkipOnboarding);
    let first = controller.sign_in();
    assert!(first.changed);
    assert!(first.snapshot.authenticated);
    assert_eq!(first.snapshot.screen, ScreenId::Discover);

    let second = controller.sign_in();
    assert!(second.snapshot.authenticated);
    assert_eq!(second.snapshot.screen, ScreenId::Discover);
}

#[test]
fn test_select_then_exit_returns_to_discover_from_any_screen() {
    let starts: Vec<Vec<ViewCommand>> = vec![
        vec![],
        vec![ViewCommand::NavigateTo(Tab::Dashboard)],
        vec![ViewCommand::NavigateTo(Tab::Profile)],
        vec![ViewCommand::SelectRoutine],
    ];
    for start in starts {
        let mut controller = active_controller();
        for cmd in &start {
            controller.process(*cmd);
        }
        controller.select_routine();
        assert_eq!(controller.snapshot().screen, ScreenId::RoutineDetail);
        let result = controller.exit_routine_detail();
        assert_eq!(result.snapshot.screen, ScreenId::Discover, "after {:?}", start);
    }
}

#[test]
fn test_double_toggle_restores_theme() {
    for policy in POLICIES {
        for len in 0..=3 {
            for seq in sequences(len) {
                let mut controller = ViewController::new(Theme::Dark, policy);
                for cmd in &seq {
                    controller.process(*cmd);
                }
                let before = controller.snapshot();

                let once = controller.toggle_theme();
                assert_eq!(once.snapshot.theme, before.theme.toggled());
                assert_eq!(once.snapshot.screen, before.screen);
                assert_eq!(once.snapshot.authenticated, before.authenticated);
                assert_eq!(once.side_effects, vec![SideEffect::ApplyTheme(before.theme.toggled())]);

                let twice = controller.toggle_theme();
                assert_eq!(twice.snapshot, before);
            }
        }
    }
}

#[test]
fn test_last_navigation_wins() {
    let mut controller = active_controller();
    assert_eq!(controller.navigate_to(Tab::Dashboard).snapshot.screen, ScreenId::Dashboard);
    assert_eq!(controller.navigate_to(Tab::Profile).snapshot.screen, ScreenId::Profile);
    assert_eq!(controller.navigate_to(Tab::Discover).snapshot.screen, ScreenId::Discover);
}

#[test]
fn test_scenario_sign_in() {
    let mut controller = ViewController::default();
    let initial = controller.snapshot();
    assert_eq!(initial.screen, ScreenId::SignIn);
    assert!(!initial.authenticated);

    let result = controller.sign_in();
    assert_eq!(result.snapshot.screen, ScreenId::Discover);
    assert!(result.snapshot.authenticated);
    assert_eq!(result.side_effects, vec![SideEffect::Mount(ScreenId::Discover)]);
}

#[test]
fn test_scenario_routine_detail_round_trip() {
    let mut controller = active_controller();
    let select = controller.select_routine();
    assert_eq!(select.snapshot.screen, ScreenId::RoutineDetail);
    assert_eq!(select.side_effects, vec![SideEffect::Mount(ScreenId::RoutineDetail)]);

    let exit = controller.exit_routine_detail();
    assert_eq!(exit.snapshot.screen, ScreenId::Discover);
}

#[test]
fn test_scenario_theme_toggle() {
    let mut controller = ViewController::default();
    assert_eq!(controller.snapshot().theme, Theme::Dark);
    assert_eq!(controller.toggle_theme().snapshot.theme, Theme::Light);
    assert_eq!(controller.toggle_theme().snapshot.theme, Theme::Dark);
}

#[test]
fn test_simulation_trace() {
    let commands = parse_operations(["sign-in", "navigate:home", "select-routine", "back"]).unwrap();
    let (initial, steps) = run_simulation(&commands, Theme::Light, SignInPolicy::SkipOnboarding);

    assert_eq!(initial.screen, ScreenId::SignIn);
    let screens: Vec<ScreenId> = steps.iter().map(|s| s.snapshot.screen).collect();
    assert_eq!(
        screens,
        vec![ScreenId::Discover, ScreenId::Dashboard, ScreenId::RoutineDetail, ScreenId::Discover]
    );
    assert_eq!(steps[1].command, "navigate:dashboard");
    assert!(steps.iter().all(|s| s.changed));
    assert!(steps.iter().all(|s| s.snapshot.theme == Theme::Light));
}

#[test]
fn test_simulation_rejects_unknown_operations() {
    assert!(parse_operations(["sign-in", "navigate:settings"]).is_err());
    assert!(parse_operations(["fly"]).is_err());
}
