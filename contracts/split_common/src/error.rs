use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller does not hold the role required by the operation
    Unauthorized = 10,

    // ============================================
    // VALIDATION ERRORS (20-39)
    // ============================================
    /// Address is the contract's own custody account
    InvalidAddress = 20,
    /// Amount must be positive
    InvalidAmount = 21,
    /// Campaign duration must be at least one day
    InvalidDuration = 22,
    /// Beneficiary percentages add up to more than the percentage base
    InvalidPercentageSum = 23,
    /// Beneficiary list has no entries
    EmptyBeneficiaryList = 24,
    /// Fee percentage exceeds the base, or the base is zero
    InvalidFeePercentage = 25,
    /// Asset kind does not match the operation, or token address is invalid
    InvalidTokenAddress = 26,
    /// Beneficiary list longer than MAX_BENEFICIARIES
    TooManyBeneficiaries = 27,
    /// Campaign already has MAX_CONTRIBUTORS distinct contributors
    TooManyContributors = 28,

    // ============================================
    // CAMPAIGN STATE ERRORS (40-49)
    // ============================================
    /// Campaign not found
    CampaignNotFound = 40,
    /// Campaign is no longer accepting contributions
    CampaignNotActive = 41,
    /// Campaign deadline has passed
    CampaignDeadlinePassed = 42,
    /// Campaign has not reached Successful status
    CampaignNotSuccessful = 43,
    /// Campaign has not reached Failed status
    CampaignNotFailed = 44,
    /// Contributor has nothing left to refund
    NoContributionFound = 45,
    /// Campaign funds already withdrawn
    NoFundsToWithdraw = 46,

    // ============================================
    // REGISTRY ERRORS (50-54)
    // ============================================
    /// No beneficiary list registered for this destination
    BeneficiaryListNotFound = 50,

    // ============================================
    // LEDGER ERRORS (60-69)
    // ============================================
    /// Payer balance below the requested amount
    InsufficientBalance = 60,
    /// Allowance granted to this contract below the requested amount
    InsufficientAllowance = 61,
    /// Token contract rejected the transfer
    TransferFailed = 62,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 63,

    // ============================================
    // OPERATIONAL ERRORS (70-79)
    // ============================================
    /// Contract is paused
    ContractPaused = 70,
}
