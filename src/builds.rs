/// Known OS builds and the support page carrying their update history.
///
/// Declaration order is the iteration order of all exported output.
pub const SUPPORTED_BUILDS: &[(u32, &str)] = &[
    (6002, "https://support.microsoft.com/en-us/help/4343218"), // 2008 SP2
    (7601, "https://support.microsoft.com/en-us/help/4009469"), // 7 / 2008R2 SP1
    (9200, "https://support.microsoft.com/en-us/help/4009471"), // 2012
    (9600, "https://support.microsoft.com/en-us/help/4009470"), // 8.1 / 2012R2
    (10240, "https://support.microsoft.com/en-us/help/4000823"), // Windows 10 1507 "RTM" "Threshold 1"
    (10586, "https://support.microsoft.com/en-us/help/4000824"), // Windows 10 1511 "November Update" "Threshold 2"
    (14393, "https://support.microsoft.com/en-us/help/4000825"), // Windows 10 1607 "Anniversary Update" "Redstone 1" / Server 2016
    (15063, "https://support.microsoft.com/en-us/help/4018124"), // Windows 10 1703 "Creators Update" "Redstone 2"
    (16299, "https://support.microsoft.com/en-us/help/4043454"), // Windows 10 1709 "Fall Creators Update" "Redstone 3"
    (17134, "https://support.microsoft.com/en-us/help/4099479"), // Windows 10 1803 "Redstone 4"
    (17763, "https://support.microsoft.com/en-us/help/4464619"), // Windows 10 1809 "Redstone 5" / Server 2019
];
