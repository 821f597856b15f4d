//! Built-in route table for the sales list frontend

/// `(route, expected APIs)` in probing order
pub(super) const BUILTIN_ROUTES: &[(&str, &[&str])] = &[
    // Authentication and dashboard
    ("/login", &[]),
    (
        "/",
        &[
            "/api/v1/auth/me",
            "/api/v1/dashboard/stats",
            "/api/v1/dashboard/recent-projects",
            "/api/v1/dashboard/recent-companies",
        ],
    ),
    (
        "/dashboard",
        &[
            "/api/v1/auth/me",
            "/api/v1/dashboard/stats",
            "/api/v1/dashboard/recent-projects",
            "/api/v1/dashboard/recent-companies",
        ],
    ),
    // Clients
    (
        "/clients",
        &[
            "/api/v1/auth/me",
            "/api/v1/clients/",
            "/api/v1/master/industries/",
            "/api/v1/master/statuses/",
        ],
    ),
    (
        "/clients/new",
        &[
            "/api/v1/auth/me",
            "/api/v1/master/industries/",
            "/api/v1/master/statuses/",
        ],
    ),
    (
        "/clients/1",
        &[
            "/api/v1/auth/me",
            "/api/v1/clients/1/",
            "/api/v1/clients/1/stats/",
            "/api/v1/clients/1/ng-companies/",
            "/api/v1/clients/1/projects/",
        ],
    ),
    (
        "/clients/1/select-companies",
        &[
            "/api/v1/auth/me",
            "/api/v1/clients/1/",
            "/api/v1/companies/",
            "/api/v1/master/industries/",
        ],
    ),
    // Companies
    (
        "/companies",
        &[
            "/api/v1/auth/me",
            "/api/v1/companies/",
            "/api/v1/master/industries/",
            "/api/v1/master/statuses/",
        ],
    ),
    (
        "/companies/new",
        &[
            "/api/v1/auth/me",
            "/api/v1/master/industries/",
            "/api/v1/master/prefectures/",
        ],
    ),
    (
        "/companies/5",
        &[
            "/api/v1/auth/me",
            "/api/v1/companies/5/",
            "/api/v1/companies/5/executives/",
        ],
    ),
    // Projects
    (
        "/projects",
        &[
            "/api/v1/auth/me",
            "/api/v1/projects/",
            "/api/v1/master/statuses/",
        ],
    ),
    (
        "/projects/1",
        &[
            "/api/v1/auth/me",
            "/api/v1/projects/1/",
            "/api/v1/projects/1/companies/",
            "/api/v1/master/statuses/",
        ],
    ),
    (
        "/projects/1/add-companies",
        &[
            "/api/v1/auth/me",
            "/api/v1/projects/1/",
            "/api/v1/projects/1/available-companies/",
            "/api/v1/master/industries/",
        ],
    ),
    // Settings
    ("/settings", &["/api/v1/auth/me", "/api/v1/auth/users/"]),
];
