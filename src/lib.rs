pub mod shared {
    pub mod http;
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod coordinator;
        pub mod core {
            pub mod event;
            pub mod organizer_summary;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_all_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
        }
    }
    pub mod organizers {
        pub mod directory;
        pub mod core {
            pub mod organizer;
        }
        pub mod use_cases {
            pub mod register_organizer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_organizer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
