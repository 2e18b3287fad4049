use complaint_desk::session::Session;
use complaint_desk::workflows::tabs::{
    ComplaintView, RoleCategory, TabContent, TabRouter, ViewSet, LOADING_PLACEHOLDER,
    SCROLL_STEP_PX,
};

fn router(role: &str) -> TabRouter {
    TabRouter::new(&Session::new("someone", role, "token"))
}

#[test]
fn tab_titles_per_role() {
    let cases: [(&str, &[&str]); 7] = [
        ("supervisor", &["Generate Report"]),
        ("supervisor_trainee", &["Generate Report"]),
        (
            "service_provider",
            &["Redirected Complaints", "Generate Report"],
        ),
        ("SA", &["Generate Report"]),
        (
            "convener",
            &[
                "Lodge a Complaint",
                "Complaint History",
                "Resolved Complaints",
                "Unresolved Complaints",
                "Generate Report",
            ],
        ),
        ("complaint_admin", &["Generate Report"]),
        (
            "student",
            &["Lodge a Complaint", "Complaint History", "Feedback"],
        ),
    ];

    for (role, titles) in cases {
        assert_eq!(router(role).titles(), titles.to_vec(), "role {role}");
    }
}

#[test]
fn walking_the_caretaker_strip() {
    let mut router = router("hall3_caretaker");
    assert_eq!(router.category(), RoleCategory::Caretaker);

    let mut mounted = vec![router.mounted()];
    for _ in 0..6 {
        let step = router.next();
        assert_eq!(step.scroll_by, SCROLL_STEP_PX);
        mounted.push(router.mounted());
    }

    assert_eq!(router.active(), 4);
    assert_eq!(
        mounted,
        vec![
            TabContent::View(ComplaintView::LodgeComplaint),
            TabContent::View(ComplaintView::ComplaintHistory),
            TabContent::View(ComplaintView::ResolvedComplaints),
            TabContent::View(ComplaintView::UnresolvedComplaints),
            TabContent::View(ComplaintView::GenerateReport),
            TabContent::View(ComplaintView::GenerateReport),
            TabContent::View(ComplaintView::GenerateReport),
        ]
    );

    for _ in 0..10 {
        assert_eq!(router.prev().scroll_by, -SCROLL_STEP_PX);
    }
    assert_eq!(router.active(), 0);
}

#[test]
fn report_only_host_shows_loading_for_other_tabs() {
    let session = Session::new("someone", "service_provider", "token");
    let views: ViewSet = [ComplaintView::GenerateReport].into_iter().collect();
    let mut router = TabRouter::with_views(&session, views);

    assert_eq!(router.mounted(), TabContent::Loading);
    assert_eq!(router.render().placeholder, Some(LOADING_PLACEHOLDER));
    router.next();
    assert_eq!(
        router.mounted(),
        TabContent::View(ComplaintView::GenerateReport)
    );
}
