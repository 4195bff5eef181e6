use {
    super::*,
    crate::{error::ParseError, source::MockClock},
    chrono::{Local, TimeZone},
    tempfile::TempDir,
};

/// a scratch procfs, laid out in a temporary directory.
struct Fixture {
    dir: TempDir,
    proc: ProcFs,
}

impl Fixture {
    fn new(uptime: &str, loadavg: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let proc = ProcFs {
            uptime: dir.path().join("uptime"),
            loadavg: dir.path().join("loadavg"),
            sessions: dir.path().join("sessions"),
        };
        fs::write(&proc.uptime, uptime).unwrap();
        fs::write(&proc.loadavg, loadavg).unwrap();
        fs::create_dir(&proc.sessions).unwrap();
        Self { dir, proc }
    }

    fn session(&self, name: &str) {
        let path = self.proc.sessions.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }
}

fn clock() -> MockClock {
    MockClock::new(Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
}

mod sample_tests {
    use super::*;

    #[test]
    fn structured_snapshot() {
        let fixture = Fixture::new("5000.12 1234.56\n", "0.50 1.25 2.00 1/123 4567\n");
        fixture.session("1");
        fixture.session("2");

        let clock = clock();
        let Reading::Structured(snapshot) = fixture.proc.sample(&clock).unwrap() else {
            panic!("procfs should produce a structured reading");
        };

        assert_eq!(snapshot.uptime.to_string(), "1:23");
        assert_eq!(snapshot.load.to_string(), "0.50, 1.25, 2.00");
        assert_eq!(snapshot.sessions, 2);
        assert_eq!(snapshot.sampled_at, clock.now());
    }

    #[test]
    fn malformed_uptime() {
        let fixture = Fixture::new("abc", "0.50 1.25 2.00\n");
        let err = fixture.proc.sample(&clock()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedData {
                error: ParseError::Number { .. },
                ..
            }
        ));
    }

    #[test]
    fn malformed_loadavg() {
        let fixture = Fixture::new("5000.12 1234.56\n", "0.50 1.25\n");
        let err = fixture.proc.sample(&clock()).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedData {
                error: ParseError::MissingFields {
                    expected: 3,
                    found: 2
                },
                ..
            }
        ));
    }

    #[test]
    fn missing_uptime() {
        let fixture = Fixture::new("", "");
        fs::remove_file(&fixture.proc.uptime).unwrap();

        let err = fixture.proc.sample(&clock()).unwrap_err();
        match err {
            Error::SourceUnavailable { origin, error } => {
                assert!(origin.ends_with("uptime"));
                assert_eq!(error.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_sessions() {
        let fixture = Fixture::new("1 1", "1 1 1");
        fs::remove_dir(&fixture.proc.sessions).unwrap();
        let err = fixture.proc.sample(&clock()).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[test]
    fn default_paths() {
        let ProcFs {
            uptime,
            loadavg,
            sessions,
        } = ProcFs::default();
        assert_eq!(uptime, Path::new("/proc/uptime"));
        assert_eq!(loadavg, Path::new("/proc/loadavg"));
        assert_eq!(sessions, Path::new("/run/systemd/sessions"));
    }
}

mod count_sessions_tests {
    use super::*;

    #[test]
    fn empty() {
        let fixture = Fixture::new("", "");
        assert_eq!(ProcFs::count_sessions(&fixture.proc.sessions).unwrap(), 0);
    }

    #[test]
    fn nested() {
        let fixture = Fixture::new("", "");
        fixture.session("1");
        fixture.session("2");
        fixture.session("3");
        fixture.session("seats/4");
        fixture.session("seats/5");
        assert_eq!(ProcFs::count_sessions(&fixture.proc.sessions).unwrap(), 5);
    }

    #[test]
    fn empty_subdirectories() {
        let fixture = Fixture::new("", "");
        fixture.session("1");
        fs::create_dir_all(fixture.proc.sessions.join("a/b/c")).unwrap();
        assert_eq!(ProcFs::count_sessions(&fixture.proc.sessions).unwrap(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_counted() {
        let fixture = Fixture::new("", "");
        fixture.session("1");
        let outside = fixture.dir.path().join("outside");
        fs::write(&outside, "").unwrap();
        std::os::unix::fs::symlink(&outside, fixture.proc.sessions.join("link")).unwrap();
        assert_eq!(ProcFs::count_sessions(&fixture.proc.sessions).unwrap(), 1);
    }

    #[test]
    fn absent() {
        let fixture = Fixture::new("", "");
        let root = fixture.dir.path().join("nowhere");
        let err = ProcFs::count_sessions(&root).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let fixture = Fixture::new("", "");
        fixture.session("1");
        fixture.session("locked/2");
        let locked = fixture.proc.sessions.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users can read the directory anyway, so there is nothing to observe.
        let readable = fs::read_dir(&locked).is_ok();
        let result = ProcFs::count_sessions(&fixture.proc.sessions);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            eprintln!("skipping permission_denied: running with privileges that bypass file modes");
            assert_eq!(result.unwrap(), 2);
            return;
        }

        match result {
            Err(Error::SourceUnavailable { error, .. }) => {
                assert_eq!(error.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected a permission error, got {other:?}"),
        }
    }
}
