pub mod config;

pub mod shared {
    pub mod infrastructure {
        pub mod kv_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod migrate;
            pub mod model;
            pub mod week;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod get_attendance {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_week_options {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_attendance {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_schedule_day {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_team_member {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod kv_repository;
                pub mod repository;
            }
        }
    }
}

pub mod shell;
