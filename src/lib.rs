// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod shared {
    pub mod http {
        pub mod responses;
    }
}

pub mod modules {
    pub mod admission {
        pub mod core {
            pub mod limiter;
            pub mod policy;
        }
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod events {
        pub mod core {
            pub mod ports;
            pub mod record;
            pub mod validate;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod store_in_memory;
            }
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod event_payload;
    }
}
