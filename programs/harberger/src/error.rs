use anchor_lang::prelude::*;

#[error_code]
pub enum HarbergerError {
    // General & Authorization Errors (0x1000 - 0x1999)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x1000,

    #[msg("Program is currently paused")]
    ProgramPaused = 0x1001,

    #[msg("Program is already paused")]
    AlreadyPaused = 0x1002,

    #[msg("Program is already active")]
    AlreadyActive = 0x1003,

    #[msg("Signer is not the current keeper of this asset")]
    NotKeeper = 0x1004,

    #[msg("Signer is not the creator of this asset")]
    NotCreator = 0x1005,

    #[msg("Signer is not the pledge authority")]
    NotPledgeAuthority = 0x1006,

    #[msg("Creator control conditions do not hold for this asset")]
    CreatorControlRequired = 0x1007,

    // Configuration & Bounds Errors (0x2000 - 0x2999)
    #[msg("Platform fee basis points exceed the allowed maximum")]
    InvalidPlatformFee = 0x2000,

    #[msg("Tax rate basis points exceed the allowed maximum")]
    InvalidTaxRate = 0x2001,

    #[msg("Royalty basis points must not exceed the fee denominator")]
    InvalidRoyalty = 0x2002,

    #[msg("Tax period must be greater than zero")]
    InvalidTaxPeriod = 0x2003,

    #[msg("Invocation and response periods must be greater than zero")]
    InvalidInvocationPeriod = 0x2004,

    #[msg("Allocation duration must be greater than zero")]
    InvalidDuration = 0x2005,

    #[msg("Minimum bid step must be greater than zero")]
    InvalidBidStep = 0x2006,

    #[msg("Price exceeds the maximum allowed price")]
    PriceAboveMaximum = 0x2007,

    #[msg("Price is below the asset's minimum price")]
    PriceBelowMinimum = 0x2008,

    #[msg("New admin must differ from the current admin")]
    InvalidNewAdmin = 0x2009,

    #[msg("Withdrawal destination does not match the registered withdrawal address")]
    InvalidWithdrawalDestination = 0x200a,

    // Lifecycle State Errors (0x3000 - 0x3999)
    #[msg("Asset is not held by a keeper")]
    NotKeeperHeld = 0x3000,

    #[msg("Asset is already held by a keeper")]
    AlreadyHeld = 0x3001,

    #[msg("Asset must be unowned for this action")]
    NotUnowned = 0x3002,

    #[msg("An allocation is already running for this asset")]
    AllocationExists = 0x3003,

    #[msg("No allocation is running for this asset")]
    AllocationNotStarted = 0x3004,

    #[msg("Allocation is still accepting bids")]
    AllocationStillRunning = 0x3005,

    #[msg("Allocation is no longer accepting bids")]
    AllocationClosed = 0x3006,

    #[msg("An invocation is awaiting a response")]
    InvocationPending = 0x3007,

    #[msg("Asset is not invokable at this time")]
    NotInvokable = 0x3008,

    #[msg("Asset is invokable; use direct purchase instead")]
    AssetInvokable = 0x3009,

    #[msg("No invocation has exceeded its response window")]
    InvocationNotOverdue = 0x300a,

    #[msg("No purchase order is standing for this asset")]
    NoPurchaseOrder = 0x300b,

    #[msg("The standing purchase order has expired")]
    PurchaseOrderExpired = 0x300c,

    #[msg("The standing purchase order has not expired yet")]
    PurchaseOrderNotExpired = 0x300d,

    #[msg("A claimable pledge is outstanding for this asset")]
    PledgeOutstanding = 0x300e,

    #[msg("Settlement must happen strictly before a purchase in the same instant")]
    SettlementTooRecent = 0x300f,

    #[msg("Keeper cannot purchase or reserve their own asset")]
    SelfPurchase = 0x3010,

    #[msg("Purchaser may not out-escalate their own standing order")]
    SelfEscalation = 0x3011,

    #[msg("Keeper is solvent; foreclosure is not available")]
    KeeperSolvent = 0x3012,

    #[msg("Keeper is insolvent; settle or foreclose first")]
    KeeperInsolvent = 0x3013,

    #[msg("No invocation is awaiting a response")]
    NoPendingInvocation = 0x3014,

    // Funding Errors (0x4000 - 0x4999)
    #[msg("Ledger funds are insufficient for this action")]
    InsufficientFunds = 0x4000,

    #[msg("Bid does not meet the minimum acceptable amount")]
    BidBelowMinimum = 0x4001,

    #[msg("Fixed price listings require a bid of exactly the starting price")]
    BidNotAskingPrice = 0x4002,

    #[msg("Keeper funding does not cover tax through the next invokable moment")]
    KeeperUnderfunded = 0x4003,

    #[msg("Deposit amount must be greater than zero")]
    ZeroDeposit = 0x4004,

    // Staleness Errors (0x5000 - 0x5999)
    #[msg("Restated price does not match the current price")]
    StalePrice = 0x5000,

    #[msg("Restated tax rate does not match the current tax rate")]
    StaleTaxRate = 0x5001,

    #[msg("Restated royalty does not match the current royalty")]
    StaleRoyalty = 0x5002,

    #[msg("Restated invocation period does not match the current period")]
    StaleInvocationPeriod = 0x5003,

    #[msg("Restated pledge expiry does not match the current pledge")]
    StalePledge = 0x5004,

    // Ledger Account Errors (0x6000 - 0x6999)
    #[msg("Ledger account does not belong to this asset")]
    LedgerAssetMismatch = 0x6000,

    #[msg("Ledger account owner does not match the expected party")]
    LedgerOwnerMismatch = 0x6001,

    #[msg("A required ledger account was not provided")]
    MissingLedgerAccount = 0x6002,

    // Arithmetic Errors (0x8000 - 0x8999)
    #[msg("Arithmetic overflow")]
    Overflow = 0x8000,

    #[msg("Arithmetic underflow")]
    Underflow = 0x8001,
}
