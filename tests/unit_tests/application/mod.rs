mod provider_dispatcher_test;
mod topic_extractor_test;
