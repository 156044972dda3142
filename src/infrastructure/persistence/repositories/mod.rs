mod pg_conversation_repository;

pub use pg_conversation_repository::PgConversationRepository;
