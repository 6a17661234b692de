const PEOPLE_RETRIEVED_METRIC_NAME: &str = "people_retrieved";
const PEOPLE_CREATED_METRIC_NAME: &str = "people_created";

#[inline]
pub fn increment_people_retrieved() {
    metrics::counter!(PEOPLE_RETRIEVED_METRIC_NAME).increment(1);
}

#[inline]
pub fn increment_people_created() {
    metrics::counter!(PEOPLE_CREATED_METRIC_NAME).increment(1);
}
